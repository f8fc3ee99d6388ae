//! Asset loading with embedded fallbacks
//!
//! - Config: `CONFIG_FILE` when set and present, otherwise the embedded
//!   `config.yaml`.
//! - Web page: `index.html` from the image directory when present (served by
//!   the index handler), otherwise the embedded default page.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded default web page
#[derive(RustEmbed)]
#[folder = "web/"]
#[include = "*.html"]
struct EmbeddedWeb;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Web,
    Config,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Default)]
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if CONFIG_FILE was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::warn!(path = %path.display(), "Config file not found, using embedded config");
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Where the config is read from, for status output
    pub fn config_source(&self) -> String {
        let embedded = || {
            format!(
                "embedded ({})",
                Self::list_embedded(AssetCategory::Config).join(", ")
            )
        };
        match self.config_file {
            Some(ref path) if path.exists() => path.display().to_string(),
            Some(_) => format!("{} (file not found)", embedded()),
            None => embedded(),
        }
    }

    /// The embedded default `index.html`
    pub fn default_index() -> Cow<'static, [u8]> {
        EmbeddedWeb::get("index.html")
            .map(|f| f.data)
            .unwrap_or(Cow::Borrowed(b"<!DOCTYPE html><title>Ichabod</title>".as_slice()))
    }

    /// List embedded asset files for a category
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        let mut files: Vec<String> = match category {
            AssetCategory::Web => EmbeddedWeb::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => EmbeddedConfig::iter().map(|s| s.to_string()).collect(),
        };
        files.sort();
        files
    }
}
