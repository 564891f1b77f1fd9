//! Resolve resource identifiers against ordered search roots, fetch from
//! local files or HTTP(S), and decode YAML/JSON into a mapping.

pub mod config;
pub mod logging;

pub mod decode;
pub mod error;
pub mod fallback;
pub mod fetch;
pub mod uri;

pub use decode::{decode_as, decode_object, Content, Object};
pub use error::{CandidateFailure, DecodeError, FallbackError, FetchError, LoadError};
pub use fallback::{
    fetch_first_object, fetch_first_object_async, fetch_first_object_report, fetch_object,
    resolve_candidates, resolve_fetch_first_object, resolve_fetch_first_object_async, Candidates,
};
pub use fetch::{fetch_raw, FetchOptions, FileReadOptions, HttpRequestOptions};
pub use uri::{extension_of, has_protocol, resolve_uri};
