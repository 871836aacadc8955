//! Application settings loading from config.toml
//!
//! The settings file lists the categories to seed on startup and the default
//! export format. Categories are seeded in file order, so on a fresh database the
//! first entry receives id 1, the second id 2, and so on.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Categories to seed if they are missing
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Configuration for a single category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Display name of the category
    pub name: String,
}

/// Export settings
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct ExportConfig {
    /// Spreadsheet format produced by the `export` command
    #[serde(default)]
    pub format: ExportFormat,
}

/// Supported tabular export formats
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Office Open XML workbook
    #[default]
    Xlsx,
    /// Comma-separated values
    Csv,
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A category entry has no name
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading configuration from {}", path_ref.display());
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Loads settings from `CONFIG_PATH`, falling back to ./config.toml.
///
/// A missing file is not an error: an empty configuration is returned instead.
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        tracing::warn!("No config file at {path}; continuing without seeded categories");
        return Ok(Config::default());
    }
    load_config(path)
}

fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if config.categories.iter().any(|c| c.name.trim().is_empty()) {
        return Err(Error::Config {
            message: "Category names in config.toml cannot be empty".to_string(),
        });
    }

    Ok(config)
}
