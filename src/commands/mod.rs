//! Command implementations for blogspark.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared construction of the Gemini client.

mod ask;
mod chat;
mod doctor;
mod reset;
mod status;

use crate::cli::{Cli, Command};
use crate::config::{self, Config};
use crate::context::AgentContext;
use crate::error::Result;
use crate::gemini::GeminiClient;

/// Dispatch a parsed CLI invocation to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = AgentContext::resolve(cli.config.as_deref(), cli.state_file.as_deref())?;

    match cli.command {
        Command::Chat => chat::cmd_chat(&ctx),
        Command::Ask(args) => ask::cmd_ask(&ctx, args),
        Command::Status => status::cmd_status(&ctx),
        Command::Reset(args) => reset::cmd_reset(&ctx, args),
        Command::Doctor => doctor::cmd_doctor(&ctx),
    }
}

/// Build the production Gemini client for commands that call the API.
fn build_client(config: &Config) -> Result<GeminiClient> {
    let api_key = config::api_key_from_env()?;
    GeminiClient::new(config, api_key)
}
