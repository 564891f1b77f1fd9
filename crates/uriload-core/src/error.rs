//! Error types for decoding, fetching and fallback sequences.
//!
//! Library-level errors are typed so callers can tell a missing file from a
//! malformed document. Process plumbing (config, logging) uses `anyhow`.

use std::fmt;
use thiserror::Error;

/// Content could not be interpreted as a structured object.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input was a structured value but not a mapping (e.g. a bare number).
    #[error("unsupported input: expected a mapping, bytes or text, got {found}")]
    Unsupported { found: &'static str },
    /// Byte buffer was not valid UTF-8.
    #[error("content is not valid UTF-8")]
    Utf8(#[source] std::str::Utf8Error),
    /// Text was not valid YAML (or JSON).
    #[error("malformed YAML/JSON")]
    Yaml(#[source] serde_yaml::Error),
    /// Text parsed, but the document root is not a mapping.
    #[error("document root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
    /// Mapping could not be deserialized into the requested type.
    #[error("mapping does not match the requested type")]
    Typed(#[source] serde_yaml::Error),
}

/// The underlying read or request failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is {size} bytes, limit is {limit}")]
    TooLarge { path: String, size: u64, limit: u64 },
    #[error("GET {url} failed")]
    Http {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    #[error("unsupported URI scheme {scheme:?} in {url}")]
    UnsupportedScheme { url: String, scheme: String },
}

/// Failure of a single fetch-then-decode attempt.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("decode {url}")]
    Decode {
        url: String,
        #[source]
        source: DecodeError,
    },
    /// A fallback sequence was given nothing to try.
    #[error("no candidate locations given")]
    NoCandidates,
    /// The blocking task running the load was cancelled (runtime shutdown).
    #[error("load task was cancelled")]
    Cancelled,
}

/// One failed candidate in a fallback sequence.
#[derive(Debug)]
pub struct CandidateFailure {
    pub url: String,
    pub error: LoadError,
}

/// Every candidate in a fallback sequence failed; failures are kept in attempt order.
#[derive(Debug)]
pub struct FallbackError {
    pub failures: Vec<CandidateFailure>,
}

impl fmt::Display for FallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failures.last() {
            Some(last) => write!(
                f,
                "all {} candidate(s) failed; last ({}): {}",
                self.failures.len(),
                last.url,
                last.error
            ),
            None => write!(f, "{}", LoadError::NoCandidates),
        }
    }
}

impl std::error::Error for FallbackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.failures
            .last()
            .map(|f| &f.error as &(dyn std::error::Error + 'static))
    }
}

impl FallbackError {
    /// Error of the last attempted candidate (`NoCandidates` if nothing was attempted).
    pub fn into_last(self) -> LoadError {
        self.failures
            .into_iter()
            .last()
            .map(|f| f.error)
            .unwrap_or(LoadError::NoCandidates)
    }

    pub fn last(&self) -> Option<&CandidateFailure> {
        self.failures.last()
    }
}
