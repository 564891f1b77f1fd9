//! Ordered fallback: try candidates one at a time until one fetches and decodes.
//!
//! Candidates are attempted strictly left to right and never concurrently, so
//! earlier entries act as higher-priority sources and later candidates are
//! never touched once an earlier one succeeds. Interior failures are kept
//! quiet (debug logs only); when every candidate fails the last error is
//! surfaced.

use crate::decode::{decode_object, Content, Object};
use crate::error::{CandidateFailure, FallbackError, LoadError};
use crate::fetch::{fetch_raw, FetchOptions};
use crate::uri::resolve_uri;

/// An ordered list of candidate URLs or base locations.
///
/// Built from a single string or from any list of strings, so one location is
/// just a one-element sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates(Vec<String>);

impl Candidates {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl IntoIterator for Candidates {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<&str> for Candidates {
    fn from(s: &str) -> Self {
        Candidates(vec![s.to_string()])
    }
}

impl From<String> for Candidates {
    fn from(s: String) -> Self {
        Candidates(vec![s])
    }
}

impl From<&String> for Candidates {
    fn from(s: &String) -> Self {
        Candidates(vec![s.clone()])
    }
}

impl From<Vec<String>> for Candidates {
    fn from(v: Vec<String>) -> Self {
        Candidates(v)
    }
}

impl From<Vec<&str>> for Candidates {
    fn from(v: Vec<&str>) -> Self {
        v.as_slice().into()
    }
}

impl From<&[String]> for Candidates {
    fn from(v: &[String]) -> Self {
        Candidates(v.to_vec())
    }
}

impl From<&[&str]> for Candidates {
    fn from(v: &[&str]) -> Self {
        Candidates(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Candidates {
    fn from(v: [&str; N]) -> Self {
        v.as_slice().into()
    }
}

impl<const N: usize> From<[String; N]> for Candidates {
    fn from(v: [String; N]) -> Self {
        Candidates(v.into())
    }
}

impl FromIterator<String> for Candidates {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Candidates(iter.into_iter().collect())
    }
}

/// Fetches `url` and decodes the content into a mapping.
pub fn fetch_object(url: &str, options: &FetchOptions) -> Result<Object, LoadError> {
    let bytes = fetch_raw(url, options)?;
    decode_object(Content::Bytes(bytes)).map_err(|source| LoadError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Like [`fetch_first_object`], but on failure returns every candidate's error
/// in attempt order.
pub fn fetch_first_object_report(
    urls: impl Into<Candidates>,
    options: &FetchOptions,
) -> Result<Object, FallbackError> {
    let urls = urls.into();
    let total = urls.len();
    let mut failures = Vec::new();

    for (i, url) in urls.into_iter().enumerate() {
        tracing::debug!("trying candidate {}/{}: {}", i + 1, total, url);
        match fetch_object(&url, options) {
            Ok(obj) => {
                if i > 0 {
                    tracing::info!("loaded {} after {} failed candidate(s)", url, i);
                }
                return Ok(obj);
            }
            Err(error) => {
                tracing::debug!("candidate {} failed: {}", url, error);
                failures.push(CandidateFailure { url, error });
            }
        }
    }

    if let Some(last) = failures.last() {
        tracing::warn!(
            "all {} candidate(s) failed; last {}: {}",
            total,
            last.url,
            last.error
        );
    }
    Err(FallbackError { failures })
}

/// Tries each URL in order and returns the first object that fetches and
/// decodes. If all fail, returns the last candidate's error.
pub fn fetch_first_object(
    urls: impl Into<Candidates>,
    options: &FetchOptions,
) -> Result<Object, LoadError> {
    fetch_first_object_report(urls, options).map_err(FallbackError::into_last)
}

/// Resolves `identifier` against each base location (in order) and loads the
/// first candidate that succeeds.
pub fn resolve_fetch_first_object(
    identifier: &str,
    bases: impl Into<Candidates>,
    default_extension: Option<&str>,
    options: &FetchOptions,
) -> Result<Object, LoadError> {
    fetch_first_object(resolve_candidates(identifier, bases, default_extension), options)
}

/// Resolved URL for each base location, in order.
pub fn resolve_candidates(
    identifier: &str,
    bases: impl Into<Candidates>,
    default_extension: Option<&str>,
) -> Candidates {
    bases
        .into()
        .into_iter()
        .map(|base| resolve_uri(identifier, Some(base.as_str()), default_extension))
        .collect()
}

/// [`fetch_first_object`] on the blocking thread pool, for async callers.
///
/// The candidates are still tried one at a time.
pub async fn fetch_first_object_async(
    urls: impl Into<Candidates>,
    options: FetchOptions,
) -> Result<Object, LoadError> {
    let urls = urls.into();
    joined(tokio::task::spawn_blocking(move || fetch_first_object(urls, &options)).await)
}

/// Unwraps a blocking task's result: panics are resumed, cancellation
/// (runtime shutdown) becomes [`LoadError::Cancelled`].
fn joined(
    res: Result<Result<Object, LoadError>, tokio::task::JoinError>,
) -> Result<Object, LoadError> {
    match res {
        Ok(res) => res,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => {
            tracing::debug!("load task did not complete: {}", e);
            Err(LoadError::Cancelled)
        }
    }
}

/// [`resolve_fetch_first_object`] on the blocking thread pool, for async callers.
pub async fn resolve_fetch_first_object_async(
    identifier: &str,
    bases: impl Into<Candidates>,
    default_extension: Option<&str>,
    options: FetchOptions,
) -> Result<Object, LoadError> {
    let urls = resolve_candidates(identifier, bases, default_extension);
    fetch_first_object_async(urls, options).await
}
