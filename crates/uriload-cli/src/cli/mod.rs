//! CLI for uriload.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use uriload_core::config::{self, LoaderConfig};

use commands::{run_fetch, run_load, run_resolve};

/// Top-level CLI for uriload.
#[derive(Debug, Parser)]
#[command(name = "uriload")]
#[command(about = "Resolve, fetch and decode YAML/JSON documents from files or HTTP(S)", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/uriload/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by commands that fetch.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Extra HTTP header, "Name: value" (repeatable).
    #[arg(long = "header", short = 'H', value_name = "HEADER")]
    pub headers: Vec<String>,

    /// Print the object as JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the fully qualified URL(s) an identifier resolves to.
    Resolve {
        /// Identifier: bare name, path or URL.
        id: String,
        /// Base location (directory or URL prefix); repeatable, tried in order.
        #[arg(long = "base", short = 'b', value_name = "BASE")]
        bases: Vec<String>,
        /// Extension appended when the identifier has none (e.g. ".yaml").
        #[arg(long, value_name = "EXT")]
        ext: Option<String>,
    },

    /// Fetch the first URL that loads and print the decoded object.
    Fetch {
        /// Candidate URLs or paths, in priority order.
        #[arg(required = true)]
        urls: Vec<String>,
        #[command(flatten)]
        args: FetchArgs,
    },

    /// Resolve an identifier against search roots and print the first object that loads.
    Load {
        /// Identifier: bare name, path or URL.
        id: String,
        /// Base location; repeatable. Defaults to `search_roots` from the config.
        #[arg(long = "base", short = 'b', value_name = "BASE")]
        bases: Vec<String>,
        /// Default extension. Defaults to `default_extension` from the config.
        #[arg(long, value_name = "EXT")]
        ext: Option<String>,
        #[command(flatten)]
        args: FetchArgs,
    },
}

/// Parses "Name: value" header arguments.
pub(crate) fn parse_headers(raw: &[String]) -> Result<HashMap<String, String>> {
    raw.iter()
        .map(|h| {
            let (name, value) = h
                .split_once(':')
                .with_context(|| format!("header {:?} is not of the form \"Name: value\"", h))?;
            Ok((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg: LoaderConfig = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { id, bases, ext } => run_resolve(&id, &bases, ext.as_deref())?,
            CliCommand::Fetch { urls, args } => run_fetch(&cfg, urls, &args).await?,
            CliCommand::Load {
                id,
                bases,
                ext,
                args,
            } => run_load(&cfg, &id, bases, ext, &args).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
