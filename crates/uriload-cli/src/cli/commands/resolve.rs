//! `uriload resolve <id>` – print resolved URLs without fetching.

use anyhow::Result;
use uriload_core::{resolve_candidates, resolve_uri};

pub fn run_resolve(id: &str, bases: &[String], ext: Option<&str>) -> Result<()> {
    if bases.is_empty() {
        println!("{}", resolve_uri(id, None, ext));
        return Ok(());
    }
    for url in resolve_candidates(id, bases, ext) {
        println!("{url}");
    }
    Ok(())
}
