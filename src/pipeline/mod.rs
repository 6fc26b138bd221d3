//! The stateful generation pipeline.
//!
//! One request flows through three sequential generation calls:
//!
//! 1. intent extraction (strict parse, fallback on failure)
//! 2. prompt planning (opaque text, informed by niches and history)
//! 3. final rendering (opaque text, fixed output template)
//!
//! Between steps 1 and 2 the extracted intent is folded into the persisted
//! state and saved, so the planner always observes history inclusive of the
//! current request. Each stage runs exactly once, blocking; there are no
//! retries. Generation failures never abort a request: the extractor
//! substitutes a fallback intent, and the later stages pass sentinel
//! strings through into the final output.

pub mod intent;
pub mod plan;
pub mod render;

use crate::error::{Result, SparkError};
use crate::gemini::TextGenerator;
use crate::state::AgentState;
use chrono::Utc;
use std::path::PathBuf;

/// The stateful agent: a generation backend plus the persisted state.
///
/// Owns the state document for the lifetime of the process. State is
/// loaded once at construction and saved after every completed request.
pub struct Agent<G: TextGenerator> {
    generator: G,
    state: AgentState,
    state_path: PathBuf,
}

impl<G: TextGenerator> Agent<G> {
    /// Load (or initialize) the state file and build the agent.
    pub fn new(generator: G, state_path: PathBuf) -> Result<Self> {
        let state = AgentState::load_or_init(&state_path)?;
        Ok(Self {
            generator,
            state,
            state_path,
        })
    }

    /// Read-only view of the current state, for surfaces that display it.
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Run the full pipeline for one request and return the rendered text.
    ///
    /// The only error path is state persistence; generation failures
    /// degrade to defaults or pass-through text as documented per stage.
    pub fn run(&mut self, user_input: &str) -> Result<String> {
        if user_input.trim().is_empty() {
            return Err(SparkError::UserError(
                "request must not be empty".to_string(),
            ));
        }

        let intent = intent::extract_intent(&self.generator, user_input);

        // State must be updated and persisted before planning so the
        // planner sees history inclusive of this request.
        self.state.record_turn(intent.clone(), user_input, Utc::now());
        self.state.save(&self.state_path)?;

        let plan = plan::plan_prompt(&self.generator, &intent, &self.state);
        Ok(render::render_prompt(
            &self.generator,
            &plan,
            &self.state.user_preferences.tone,
        ))
    }
}
