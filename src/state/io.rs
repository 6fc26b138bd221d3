//! File I/O for the persisted agent state.
//!
//! Loading is deliberately forgiving: a missing, unreadable, or corrupt
//! state file is replaced with freshly initialized defaults rather than
//! failing the invocation. Saving is a plain synchronous overwrite; a torn
//! write is recovered on the next load through the same corrupt-means-
//! defaults policy.

use super::AgentState;
use crate::error::{Result, SparkError};
use std::path::Path;

impl AgentState {
    /// Load the state document, substituting defaults when the file is
    /// missing, unreadable, or not valid JSON. Never fails.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Load the state document, writing a fresh default file when nothing
    /// usable exists on disk.
    ///
    /// This is the startup path: after it returns, the file exists and
    /// round-trips, so later saves only ever overwrite.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists()
            && let Ok(content) = std::fs::read_to_string(path)
            && let Ok(state) = serde_json::from_str::<Self>(&content)
        {
            return Ok(state);
        }

        let state = Self::default();
        state.save(path)?;
        Ok(state)
    }

    /// Overwrite the state file with the current document, pretty-printed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                SparkError::StateError(format!(
                    "failed to create state directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            SparkError::StateError(format!("failed to serialize agent state: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            SparkError::StateError(format!(
                "failed to write state file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
