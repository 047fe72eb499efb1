//! Trivia configuration loaded from TOML.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::NUM_CATEGORIES;

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "JEOPARDY_API_URL";

/// Settings for talking to the clue provider.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Base URL of the jService-compatible API.
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    /// How many categories to list before sampling a board from them.
    #[serde(default = "default_category_pool_size")]
    category_pool_size: usize,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://jservice.io/api/".to_string()
}

fn default_category_pool_size() -> usize {
    100
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            category_pool_size: default_category_pool_size(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl TriviaConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, does not parse, or
    /// lists fewer categories than a board needs.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(api_base_url = %config.api_base_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// # Errors
    ///
    /// Same as [`TriviaConfig::from_file`] when the file exists.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies the `JEOPARDY_API_URL` environment override, then an explicit one.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, api_url: Option<String>) -> Self {
        if let Ok(env_url) = std::env::var(API_URL_ENV) {
            debug!(url = %env_url, "Applying API URL from environment");
            self.api_base_url = env_url;
        }
        if let Some(url) = api_url {
            debug!(url = %url, "Applying API URL from command line");
            self.api_base_url = url;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.category_pool_size < NUM_CATEGORIES {
            return Err(ConfigError::new(format!(
                "category_pool_size must be at least {}, got {}",
                NUM_CATEGORIES, self.category_pool_size
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
