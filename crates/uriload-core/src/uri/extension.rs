//! Extension detection from a path or URI basename.

/// Returns the extension of the last path segment of `name`, without the dot.
///
/// Returns `""` when there is no dot, when `name` is `None`, or when the last
/// dot-separated part is numeric, so version-like names such as
/// `file-0.0.3` are not mistaken for having a `3` extension. The string is
/// taken as-is: for `https://h.example/` the segment is `h.example`.
pub fn extension_of(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };

    let mut parts = basename(name).split('.');
    let Some(last) = parts.next_back() else {
        return String::new();
    };
    if parts.next().is_none() || is_numeric(last) {
        return String::new();
    }
    last.to_string()
}

/// Last `/`-separated segment, trailing slashes ignored.
fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Empty, a finite decimal, or a signed/unsigned `Infinity`.
fn is_numeric(part: &str) -> bool {
    let unsigned = part.strip_prefix(['+', '-']).unwrap_or(part);
    part.is_empty()
        || unsigned == "Infinity"
        || part.parse::<f64>().map_or(false, f64::is_finite)
}
