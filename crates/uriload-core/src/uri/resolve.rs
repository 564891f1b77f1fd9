//! Resolution of identifiers into fully qualified, fetchable URLs.

use std::path::{Component, Path, PathBuf};

use super::extension::extension_of;
use super::protocol::has_protocol;
use super::FILE_SCHEME;

/// Resolves `identifier` against an optional base location into a URL that
/// always carries a scheme.
///
/// 1. If `identifier` has no extension and `default_extension` is given, it is
///    appended verbatim (include the dot, e.g. `".yaml"`).
/// 2. If the result has no scheme and `base` is given, `base` is prepended by
///    plain concatenation; separators are the caller's job.
/// 3. If there is still no scheme, the result is a filesystem path: it is made
///    absolute against the working directory and prefixed with `file://`.
///
/// Pure string work; never touches the network or the filesystem contents.
///
/// # Examples
///
/// - `resolve_uri("a/b", Some("http://h.example/"), Some(".yaml"))` → `"http://h.example/a/b.yaml"`
/// - `resolve_uri("/etc/app", None, Some(".json"))` → `"file:///etc/app.json"`
pub fn resolve_uri(identifier: &str, base: Option<&str>, default_extension: Option<&str>) -> String {
    let mut url = identifier.to_string();

    if let Some(ext) = default_extension {
        if extension_of(Some(identifier)).is_empty() {
            url.push_str(ext);
        }
    }

    if let Some(base) = base {
        if !has_protocol(&url) {
            url = format!("{base}{url}");
        }
    }

    if !has_protocol(&url) {
        url = format!("{FILE_SCHEME}{}", absolute_path(&url).to_string_lossy());
    }

    url
}

/// Makes `path` absolute against the current working directory and removes
/// `.` and `..` components lexically (no symlink resolution).
///
/// If the working directory cannot be read, a relative path stays relative.
pub fn absolute_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                tracing::debug!("cannot read working directory ({}); using {} as is", e, path.display());
                path.to_path_buf()
            }
        }
    };
    normalize(&joined)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
