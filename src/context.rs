//! Path and configuration resolution for blogspark.
//!
//! This module provides the "environment resolution" layer that turns
//! optional CLI overrides into the concrete paths every command works with:
//! the config file and the persisted state file.
//!
//! All commands go through this module so that overrides behave the same
//! everywhere and so tests can point the agent at temporary files.

use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Default config file path relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "blogspark.yaml";

/// Resolved paths and configuration for one invocation.
#[derive(Debug, Clone)]
pub struct AgentContext {
    /// The loaded configuration (defaults when no config file exists).
    pub config: Config,

    /// Path the config was loaded from (or would be loaded from).
    pub config_path: PathBuf,

    /// Path to the persisted agent state file.
    pub state_path: PathBuf,
}

impl AgentContext {
    /// Resolve the context from optional CLI overrides.
    ///
    /// Resolution order for the state file: `--state-file` override first,
    /// then the `state_file` entry of the config, which defaults to
    /// `agent_state.json` in the working directory.
    pub fn resolve(
        config_override: Option<&Path>,
        state_override: Option<&Path>,
    ) -> Result<Self> {
        let config_path = config_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let config = Config::load_or_default(&config_path)?;

        let state_path = state_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&config.state_file));

        Ok(Self {
            config,
            config_path,
            state_path,
        })
    }
}
