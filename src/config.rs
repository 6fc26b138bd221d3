//! Configuration model for blogspark.
//!
//! This module defines the Config struct that represents `blogspark.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.
//!
//! The API credential is deliberately not part of the config file. It is
//! read from the `GEMINI_API_KEY` environment variable only, so the config
//! file can be committed without leaking secrets.

use crate::error::{Result, SparkError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_state_file() -> String {
    "agent_state.json".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Configuration for the blogspark agent.
///
/// This struct represents the contents of `blogspark.yaml`. Every field is
/// optional in the file; unknown fields are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model name used for all generation calls.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generation API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Path to the persisted agent state file, relative to the working
    /// directory unless absolute.
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// Request timeout for generation calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base_url: default_api_base_url(),
            state_file: default_state_file(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load the config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SparkError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            SparkError::UserError(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the config from a YAML file, falling back to defaults when the
    /// file does not exist. A present-but-invalid file is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(SparkError::UserError(
                "config error: 'model' must not be empty".to_string(),
            ));
        }

        if self.api_base_url.trim().is_empty() {
            return Err(SparkError::UserError(
                "config error: 'api_base_url' must not be empty".to_string(),
            ));
        }

        if self.state_file.trim().is_empty() {
            return Err(SparkError::UserError(
                "config error: 'state_file' must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(SparkError::UserError(
                "config error: 'timeout_secs' must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Read the API key from the environment.
///
/// Returns a user error with setup guidance when the key is missing or
/// blank, mirroring what the `doctor` command reports.
pub fn api_key_from_env() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(SparkError::UserError(format!(
            "{} is not set.\n\n\
             1. Get an API key from: https://aistudio.google.com/app/apikey\n\
             2. Export it before running: export {}=your_actual_key_here",
            API_KEY_ENV, API_KEY_ENV
        ))),
    }
}
