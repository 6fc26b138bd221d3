//! Implementation of the `blogspark status` command.
//!
//! Prints the persisted agent state without touching the API or mutating
//! anything: preferences, accumulated niches, and the retained history.

use crate::context::AgentContext;
use crate::error::Result;
use crate::state::AgentState;

/// Execute the `blogspark status` command.
pub fn cmd_status(ctx: &AgentContext) -> Result<()> {
    let state = AgentState::load_or_default(&ctx.state_path);

    println!("Agent State");
    println!("===========");
    println!();
    println!("State file:  {}", ctx.state_path.display());
    println!("Preferences: tone={}, complexity={}",
        state.user_preferences.tone, state.user_preferences.complexity
    );
    println!();

    if state.niches.is_empty() {
        println!("Niches: (none yet)");
    } else {
        println!("Niches ({}):", state.niches.len());
        for niche in &state.niches {
            println!("  - {}", niche);
        }
    }
    println!();

    if state.history.is_empty() {
        println!("History: (empty)");
        return Ok(());
    }

    println!("History ({} of {} max):", state.history.len(), crate::state::HISTORY_CAPACITY);
    for turn in &state.history {
        println!(
            "  {}  topic: {:<24} input: {}",
            turn.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            turn.analysis.topic,
            turn.user_input
        );
    }

    Ok(())
}
