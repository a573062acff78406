//! Configuration loaded from `wordbridge.toml`.
//!
//! ```toml
//! [poet]
//! tie_break = "first_seen"
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Every section and field is optional; missing values take their defaults.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::types::TieBreak;

/// Poet section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoetConfig {
    /// Policy for equal-scoring bridge words.
    pub tie_break: TieBreak,
}

/// Logging section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LogConfig {
    /// Parse the configured level.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level).map_err(|e| ConfigError::Invalid {
            field: "log.level".to_string(),
            reason: format!("'{}': {}", self.level, e),
        })
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordbridgeConfig {
    /// Poet options.
    pub poet: PoetConfig,
    /// Logging options.
    pub log: LogConfig,
}

impl WordbridgeConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: WordbridgeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: "wordbridge::config",
            path = %path.display(),
            tie_break = %config.poet.tie_break,
            level = %config.log.level,
            "Loaded config"
        );
        Ok(config)
    }

    /// Check values that parse but are not usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log.level_filter()?;
        Ok(())
    }
}
