//! ORDO configuration.

use crate::index::IndexConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Config text is not valid
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdoConfig {
    /// Index settings
    pub index: IndexConfig,
    /// Default tracing filter directive
    pub log_filter: String,
}

impl Default for OrdoConfig {
    fn default() -> Self {
        Self {
            index: IndexConfig::default(),
            log_filter: "ordo=info".to_string(),
        }
    }
}

impl OrdoConfig {
    /// Parse from JSON text. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from a JSON file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Render as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
