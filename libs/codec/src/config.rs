//! # Encoder Configuration
//!
//! Tunable limits and diagnostics for [`crate::Encoder`], loadable from TOML so
//! deployments can cap record sizes without recompiling.
//!
//! ```toml
//! max_message_size = 4096
//! log_rejections = true
//! log_truncation = false
//! ```

use logwire_types::{MAX_MESSAGE_SIZE, MIN_MESSAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading or validating an [`EncoderConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read encoder config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse encoder config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid encoder config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Largest record size `bind` accepts (in bytes)
    pub max_message_size: usize,

    /// Emit a warning when `bind` rejects a buffer
    pub log_rejections: bool,

    /// Emit a warning when a record is delivered truncated
    pub log_truncation: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_message_size: MAX_MESSAGE_SIZE,
            log_rejections: true,
            log_truncation: true,
        }
    }
}

impl EncoderConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_MESSAGE_SIZE..=MAX_MESSAGE_SIZE).contains(&self.max_message_size) {
            return Err(ConfigError::Invalid(format!(
                "max_message_size {} outside {}..={}",
                self.max_message_size, MIN_MESSAGE_SIZE, MAX_MESSAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Effective record size limit, never above what the header can hold
    pub(crate) fn size_limit(&self) -> usize {
        self.max_message_size.min(MAX_MESSAGE_SIZE)
    }
}
