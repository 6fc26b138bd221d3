//! CLI argument parsing for blogspark.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BlogSpark: stateful writing-prompt assistant driven by the Gemini API.
///
/// The agent remembers topics and the last few requests across sessions in
/// a small JSON state file, and uses that memory when planning new prompts.
#[derive(Parser, Debug)]
#[command(name = "blogspark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the YAML config file (default: blogspark.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the persisted state file (overrides the config setting).
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for blogspark.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive request/response loop.
    ///
    /// Reads one free-text request per line; `exit` or `quit` ends the
    /// session. Preferences and history are saved after every request.
    Chat,

    /// Run the pipeline once for a single request and print the result.
    Ask(AskArgs),

    /// Show the persisted agent state (niches, history, preferences).
    ///
    /// Makes no API calls.
    Status,

    /// Reset the persisted agent state to defaults.
    ///
    /// Requires --force to prevent accidental loss of accumulated history.
    Reset(ResetArgs),

    /// Diagnose API connectivity.
    ///
    /// Checks the API key, lists models that support generation, and runs
    /// a small generation probe.
    Doctor,
}

/// Arguments for the `ask` command.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The free-text request (e.g., "fun prompt about sustainable fashion").
    pub request: String,
}

/// Arguments for the `reset` command.
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Actually reset the state (required for safety).
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
