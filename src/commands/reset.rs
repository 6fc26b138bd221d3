//! Implementation of the `blogspark reset` command.
//!
//! Overwrites the persisted state with documented defaults. Requires
//! `--force`: accumulated niches and history cannot be recovered.

use crate::cli::ResetArgs;
use crate::context::AgentContext;
use crate::error::{Result, SparkError};
use crate::state::AgentState;

/// Execute the `blogspark reset` command.
pub fn cmd_reset(ctx: &AgentContext, args: ResetArgs) -> Result<()> {
    if !args.force {
        return Err(SparkError::UserError(
            "refusing to reset state without --force flag.\n\n\
             Resetting discards accumulated niches, history, and preferences.\n\n\
             To reset, run:\n  blogspark reset --force"
                .to_string(),
        ));
    }

    AgentState::default().save(&ctx.state_path)?;
    println!("Reset agent state: {}", ctx.state_path.display());
    Ok(())
}
