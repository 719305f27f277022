//! Logger configuration.
//!
//! The binaries take no arguments, read no files and run with
//! [`Config::default`]. [`Config::from_toml`] is library API for code that
//! embeds the chain and already holds its settings as TOML text.

use serde::Deserialize;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Structured logger settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Structured logger settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Minimum level or filter directive (default: "info").
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit `filename` and `line_number` on every record (default: true).
    #[serde(default = "default_true")]
    pub source_location: bool,
    /// Emit the module path of the call site (default: false).
    #[serde(default)]
    pub target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            source_location: true,
            target: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
