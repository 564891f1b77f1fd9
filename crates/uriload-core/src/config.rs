//! Loader configuration: default search roots, extension, and collaborator options.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::{FetchOptions, FileReadOptions, HttpRequestOptions};

/// Configuration loaded from `~/.config/uriload/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Base locations tried in order when loading a bare identifier.
    /// Directories need a trailing `/`; they are concatenated as-is.
    #[serde(default)]
    pub search_roots: Vec<String>,
    /// Appended to identifiers that have no extension (e.g. ".yaml").
    #[serde(default)]
    pub default_extension: Option<String>,
    /// Local file read options.
    #[serde(default)]
    pub file: FileReadOptions,
    /// HTTP request options.
    #[serde(default)]
    pub http: HttpRequestOptions,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            search_roots: vec!["./".to_string()],
            default_extension: Some(".yaml".to_string()),
            file: FileReadOptions::default(),
            http: HttpRequestOptions::default(),
        }
    }
}

impl LoaderConfig {
    /// Options bag for fetch calls.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            file: self.file.clone(),
            http: self.http.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uriload")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<LoaderConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LoaderConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LoaderConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LoaderConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}
