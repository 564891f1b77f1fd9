//! Content fetching: local file reads and HTTP(S) GET.
//!
//! Each collaborator has its own explicitly typed options. A fetch uses only
//! the options that match the URL's scheme; the rest are ignored.

mod file;
mod http;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::uri::{scheme_of, FILE_SCHEME};

pub use file::{read_file, FileReadOptions};
pub use http::{http_get, HttpRequestOptions};

/// Options for both collaborators, built by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchOptions {
    #[serde(default)]
    pub file: FileReadOptions,
    #[serde(default)]
    pub http: HttpRequestOptions,
}

/// Which collaborator a URL is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route<'a> {
    File(&'a str),
    Http,
}

/// Picks the collaborator for `url`; fails for schemes other than file/http/https.
pub(crate) fn route(url: &str) -> Result<Route<'_>, FetchError> {
    if let Some(path) = url.strip_prefix(FILE_SCHEME) {
        return Ok(Route::File(path));
    }
    match scheme_of(url) {
        None => Ok(Route::File(url)),
        Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => {
            Ok(Route::Http)
        }
        Some(s) => Err(FetchError::UnsupportedScheme {
            url: url.to_string(),
            scheme: s.to_string(),
        }),
    }
}

/// Fetches the raw bytes behind `url`.
///
/// URLs without a scheme are read as local paths, `file://` URLs have the
/// scheme stripped and are read the same way, and http/https URLs are
/// fetched with a GET. Non-2xx responses are errors.
///
/// Blocking; call from `spawn_blocking` if used from async code.
pub fn fetch_raw(url: &str, options: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    match route(url)? {
        Route::File(path) => read_file(path, &options.file),
        Route::Http => http_get(url, &options.http),
    }
}
