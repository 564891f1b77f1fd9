//! URI modeling: scheme detection, extension detection, and resolution of
//! bare identifiers against a base location into fetchable URLs.

mod extension;
mod protocol;
mod resolve;

pub use extension::extension_of;
pub use protocol::{has_protocol, scheme_of};
pub use resolve::{absolute_path, resolve_uri};

/// Scheme prefix for local files.
pub const FILE_SCHEME: &str = "file://";
