//! Scheme detection.

/// Returns the scheme of `uri` if it starts with `scheme://`.
///
/// A scheme is one or more of `[A-Za-z0-9+.-]`, following the generic URI
/// grammar rather than a fixed list, so custom schemes count too.
pub fn scheme_of(uri: &str) -> Option<&str> {
    let (scheme, _) = uri.split_once("://")?;
    let valid = !scheme.is_empty()
        && scheme
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-'));
    valid.then_some(scheme)
}

/// True if `uri` already carries a `scheme://` prefix.
pub fn has_protocol(uri: &str) -> bool {
    scheme_of(uri).is_some()
}
