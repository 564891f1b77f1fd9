//! `uriload load <id>` – resolve against search roots, then load the first hit.

use anyhow::Result;
use uriload_core::config::LoaderConfig;
use uriload_core::resolve_fetch_first_object_async;

use super::output::render;
use crate::cli::{parse_headers, FetchArgs};

pub async fn run_load(
    cfg: &LoaderConfig,
    id: &str,
    bases: Vec<String>,
    ext: Option<String>,
    args: &FetchArgs,
) -> Result<()> {
    let bases = if bases.is_empty() {
        cfg.search_roots.clone()
    } else {
        bases
    };
    let ext = ext.or_else(|| cfg.default_extension.clone());
    let mut options = cfg.fetch_options();
    options.http.headers.extend(parse_headers(&args.headers)?);

    tracing::debug!("load {} from {:?} (ext {:?})", id, bases, ext);
    let obj = resolve_fetch_first_object_async(id, bases, ext.as_deref(), options).await?;
    print!("{}", render(&obj, args.json)?);
    if args.json {
        println!();
    }
    Ok(())
}
