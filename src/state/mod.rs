//! Persisted agent state for blogspark.
//!
//! The agent keeps one small JSON document across sessions:
//!
//! - `niches`: distinct topics the user has asked about, insertion-ordered
//! - `history`: the last three turns (intent analysis plus raw input)
//! - `user_preferences`: rendering preferences, read but never written by
//!   the pipeline
//!
//! Field names in the JSON are snake_case so state files written by earlier
//! versions of the agent keep loading. Unknown top-level fields and unknown
//! preference keys are preserved across load/save for forward compatibility.

mod io;
mod mutations;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Maximum number of turns retained in history.
pub const HISTORY_CAPACITY: usize = 3;

/// Structured intent extracted from one free-text request.
///
/// Produced per request and embedded inside a [`Turn`]; never persisted on
/// its own. Fields are only presence-checked; missing fields deserialize
/// to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Core topic (e.g., "sustainability", "remote work").
    #[serde(default)]
    pub topic: String,

    /// Desired tone (e.g., "inspirational", "analytical").
    #[serde(default)]
    pub tone: String,

    /// Specific constraints (e.g., "under 500 words", "for beginners").
    #[serde(default)]
    pub constraints: String,
}

impl Intent {
    /// The fixed fallback used when a model response cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            topic: "general".to_string(),
            tone: "neutral".to_string(),
            constraints: String::new(),
        }
    }
}

/// One historical record of a completed request.
///
/// Immutable once appended; removed only by capacity eviction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// When the request was recorded (serialized as an ISO-8601 string).
    pub timestamp: DateTime<Utc>,

    /// The intent extracted for this request (fallback on parse failure).
    pub analysis: Intent,

    /// The raw user input, verbatim.
    pub user_input: String,
}

/// Rendering preferences.
///
/// Recognized keys have documented defaults; anything else the user put in
/// the file rides along in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Tone applied by the renderer.
    pub tone: String,

    /// Target complexity (informational; embedded in prompts by future use).
    pub complexity: String,

    /// Unrecognized preference keys, preserved across load/save.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            tone: "friendly".to_string(),
            complexity: "medium".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

/// The single persisted state document.
///
/// Owned by the running agent for the duration of one process; persistence
/// is the only durability mechanism across restarts. `#[serde(default)]`
/// self-heals partially-initialized or older-schema documents: a file
/// missing `niches` or `history` loads with empty sequences.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentState {
    /// Distinct topics seen so far, in insertion order. No duplicates, no
    /// empty strings.
    pub niches: Vec<String>,

    /// The last [`HISTORY_CAPACITY`] turns, oldest first.
    pub history: Vec<Turn>,

    /// Rendering preferences. Never written by the pipeline.
    pub user_preferences: UserPreferences,

    /// Unrecognized top-level fields, preserved across load/save.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AgentState {
    /// Topics of the retained history turns, oldest first.
    pub fn history_topics(&self) -> Vec<&str> {
        self.history
            .iter()
            .map(|turn| turn.analysis.topic.as_str())
            .collect()
    }
}
