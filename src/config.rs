//! Configuration module for the search demo
//!
//! Configuration is a small JSON document. Every field is optional; the
//! defaults reproduce the periodic-pattern example.

use std::path::Path;

use serde::Deserialize;

use crate::error::SearchError;
use crate::search::Matcher;

/// Search configuration
#[derive(Clone, Debug, Deserialize)]
pub struct SearchConfig {
    /// Pattern to search for
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Text to search in
    #[serde(default = "default_text")]
    pub text: String,

    /// Which matcher runs the search
    #[serde(default)]
    pub matcher: Matcher,

    /// Whether to emit a structured search event after the search
    #[serde(default = "default_log_results")]
    pub log_results: bool,
}

fn default_pattern() -> String {
    "aaaaabaaaabaaabaabab".to_string()
}

fn default_text() -> String {
    "aaaaaaaabaaaabaaabaabab".to_string()
}

fn default_log_results() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            text: default_text(),
            matcher: Matcher::default(),
            log_results: default_log_results(),
        }
    }
}

impl SearchConfig {
    /// Parse configuration from JSON bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config_str = std::str::from_utf8(bytes)
            .map_err(|e| ConfigError::InvalidUtf8(e.to_string()))?;

        serde_json::from_str(config_str)
            .map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        Self::from_bytes(&bytes)
    }

    /// Run the configured search
    pub fn run(&self) -> Result<Option<usize>, SearchError> {
        self.matcher.find(self.pattern.as_bytes(), self.text.as_bytes())
    }
}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    InvalidUtf8(String),
    InvalidJson(String),
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {}", e),
            ConfigError::InvalidJson(e) => write!(f, "Invalid JSON: {}", e),
            ConfigError::Io(e) => write!(f, "Cannot read config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
