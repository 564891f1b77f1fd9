//! Tests for `resolve` parsing and header parsing.

use super::parse;
use crate::cli::{parse_headers, Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_resolve_bare() {
    match parse(&["uriload", "resolve", "app"]) {
        CliCommand::Resolve { id, bases, ext } => {
            assert_eq!(id, "app");
            assert!(bases.is_empty());
            assert!(ext.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_bases_keep_order() {
    match parse(&[
        "uriload",
        "resolve",
        "app",
        "--base",
        "/etc/app/",
        "-b",
        "https://conf.example/",
        "--ext",
        ".yaml",
    ]) {
        CliCommand::Resolve { id, bases, ext } => {
            assert_eq!(id, "app");
            assert_eq!(bases, ["/etc/app/", "https://conf.example/"]);
            assert_eq!(ext.as_deref(), Some(".yaml"));
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["uriload", "resolve", "app", "--config", "/tmp/c.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.toml")));
}

#[test]
fn headers_parse() {
    let h = parse_headers(&["Authorization: Bearer a:b".to_string()]).unwrap();
    assert_eq!(h.get("Authorization").unwrap(), "Bearer a:b");
    assert!(parse_headers(&["no-colon".to_string()]).is_err());
}
