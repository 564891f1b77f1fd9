//! `uriload fetch <url>...` – load the first candidate URL that succeeds.

use anyhow::Result;
use uriload_core::config::LoaderConfig;
use uriload_core::fetch_first_object_async;

use super::output::render;
use crate::cli::{parse_headers, FetchArgs};

pub async fn run_fetch(cfg: &LoaderConfig, urls: Vec<String>, args: &FetchArgs) -> Result<()> {
    let mut options = cfg.fetch_options();
    options.http.headers.extend(parse_headers(&args.headers)?);

    let obj = fetch_first_object_async(urls, options).await?;
    print!("{}", render(&obj, args.json)?);
    if args.json {
        println!();
    }
    Ok(())
}
