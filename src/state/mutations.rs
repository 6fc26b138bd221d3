//! Mutation helpers for the agent state.

use super::{AgentState, HISTORY_CAPACITY, Intent, Turn};
use chrono::{DateTime, Utc};

impl AgentState {
    /// Fold one completed request into the state.
    ///
    /// Appends the intent's topic to `niches` unless it is empty or already
    /// present (case-sensitive exact match), then appends a turn and evicts
    /// the oldest entries beyond [`HISTORY_CAPACITY`]. The caller persists
    /// the document afterwards; planning must not start before that.
    pub fn record_turn(&mut self, intent: Intent, user_input: &str, now: DateTime<Utc>) {
        let topic = intent.topic.clone();
        if !topic.is_empty() && !self.niches.contains(&topic) {
            self.niches.push(topic);
        }

        self.history.push(Turn {
            timestamp: now,
            analysis: intent,
            user_input: user_input.to_string(),
        });

        if self.history.len() > HISTORY_CAPACITY {
            let excess = self.history.len() - HISTORY_CAPACITY;
            self.history.drain(..excess);
        }
    }
}
