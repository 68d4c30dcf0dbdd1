//! Client configuration.
//!
//! Configuration is read from a TOML file with every field optional; missing
//! fields fall back to [`ClientConfig::default`]. The binary layers CLI flags
//! and environment variables on top.
//!
//! ```toml
//! api_url = "http://localhost:8080/api/tasks"
//! fetch_strategy = "per_status"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Task resource URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/tasks";

/// How the controller loads its snapshot from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStrategy {
    /// One request for every task.
    #[default]
    Combined,
    /// One request per status, concatenated in display order.
    PerStatus,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the task resource.
    pub api_url: String,
    /// Snapshot loading strategy.
    pub fetch_strategy: FetchStrategy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            fetch_strategy: FetchStrategy::default(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`ClientConfig`].
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

impl ClientConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] when the text is not valid.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] when the file cannot be read and
    /// [`ConfigError::ParseToml`] when its contents are not valid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Overrides the API URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
