//! Implementation of the `blogspark ask` command.
//!
//! One-shot variant of the interactive loop: run the pipeline once for the
//! given request and print the rendered prompt.

use crate::cli::AskArgs;
use crate::commands::build_client;
use crate::context::AgentContext;
use crate::error::{Result, SparkError};
use crate::pipeline::Agent;

/// Execute the `blogspark ask` command.
pub fn cmd_ask(ctx: &AgentContext, args: AskArgs) -> Result<()> {
    // Reject before touching the network or the state file.
    if args.request.trim().is_empty() {
        return Err(SparkError::UserError(
            "request must not be empty".to_string(),
        ));
    }

    let client = build_client(&ctx.config)?;
    let mut agent = Agent::new(client, ctx.state_path.clone())?;

    let response = agent.run(&args.request)?;
    println!("{}", response);
    Ok(())
}
