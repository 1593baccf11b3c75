//! CLI configuration
//!
//! Read from `~/.bridgeval/config.toml` unless `--config` points elsewhere.
//! A missing default file means defaults; a missing explicit file is an error.

use anyhow::{Context, Result};
use bridgeval_keys::KeyType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the log level
pub const LOG_LEVEL_ENV: &str = "BRIDGEVAL_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key algorithm for generated validators
    pub default_key_type: KeyType,
    /// tracing filter directive, e.g. "info" or "bridgeval=debug"
    pub log_level: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_key_type: KeyType::Ed25519,
            log_level: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".bridgeval").join("config.toml"))
    }

    /// Load the config file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
