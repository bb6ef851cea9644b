// src/config.rs

//! Configuration for the `ansi-palette` command-line tool.
//!
//! The configuration is read from a JSON file named by the
//! `ANSI_PALETTE_CONFIG` environment variable. Every field has a default, so
//! an absent variable, an empty object, or a partial file all work. The
//! palette itself is fixed and not configurable; these settings only affect
//! how results are presented and how much is logged.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV_VAR: &str = "ANSI_PALETTE_CONFIG";

/// Process-wide configuration. The binary installs it once the logger is
/// running; anything reading it earlier loads it through [`Config::get`].
pub static CONFIG: OnceCell<Config> = OnceCell::new();

/// Log filter used when neither `RUST_LOG` nor the file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Output-related settings.
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// How conversion results are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Diagnostics on stderr. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `env_logger` filter, e.g. `"debug"` or `"ansi_palette=trace"`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `196: #ff0000` and `#ff0000 ~ 196 #ff0000`.
    #[default]
    Text,
    /// One JSON object per result.
    Json,
}

impl Config {
    /// The installed configuration, loading it on first use if nothing was
    /// installed.
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::load_or_default)
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration")
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], if set.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => {
                debug!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Ok(Config::default())
            }
        }
    }

    /// Like [`Config::load`] but falls back to the defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("{:#}. Using default configuration.", e);
            Config::default()
        })
    }
}
