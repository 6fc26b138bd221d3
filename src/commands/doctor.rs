//! Implementation of the `blogspark doctor` command.
//!
//! Connectivity diagnostic for the generation API, in three steps:
//!
//! 1. Verify the API key is present and plausibly shaped.
//! 2. List models available to the key, filtered to those that support
//!    `generateContent`.
//! 3. Issue a small generation probe and check the reply.
//!
//! Any failing step exits non-zero with guidance; the pipeline itself never
//! runs these checks.

use crate::commands::build_client;
use crate::config::{API_KEY_ENV, api_key_from_env};
use crate::context::AgentContext;
use crate::error::{Result, SparkError};
use crate::gemini::{TextGenerator, is_api_error};

/// Minimum plausible key length; real keys are well above this.
const MIN_KEY_LENGTH: usize = 30;

/// Probe prompt with a verifiable expected answer.
const PROBE_PROMPT: &str = "Say exactly 'test ok'";

/// Mask a key for display: first 10 and last 6 characters.
///
/// Only called for keys that passed the length check.
fn mask_key(key: &str) -> String {
    format!("{}...{}", &key[..10], &key[key.len() - 6..])
}

/// Execute the `blogspark doctor` command.
pub fn cmd_doctor(ctx: &AgentContext) -> Result<()> {
    println!("=== Gemini API Diagnostic ===");
    println!();

    // Step 1: credential
    let api_key = api_key_from_env()?;
    if api_key.len() < MIN_KEY_LENGTH {
        return Err(SparkError::UserError(format!(
            "invalid API key format ({} characters).\n\n\
             1. Get your API key from: https://aistudio.google.com/app/apikey\n\
             2. Export it before running: export {}=your_actual_key_here",
            api_key.len(),
            API_KEY_ENV
        )));
    }
    println!("API key: found ({})", mask_key(&api_key));

    // Step 2: model listing
    let client = build_client(&ctx.config)?;
    println!();
    println!("Fetching available models...");
    let models = client.list_models().map_err(|e| {
        SparkError::ApiError(format!(
            "{}\n\nPossible solutions:\n\
             - Check the API key permissions at https://aistudio.google.com/app/apikey\n\
             - Check network access to {}",
            e, ctx.config.api_base_url
        ))
    })?;

    let generation_models: Vec<_> = models
        .iter()
        .filter(|m| m.supports_generate_content())
        .collect();

    if generation_models.is_empty() {
        return Err(SparkError::ApiError(
            "no models support generateContent (possible region restrictions)".to_string(),
        ));
    }

    for model in &generation_models {
        println!("- {}", model.name);
    }

    // Step 3: generation probe
    println!();
    println!("Testing model: {}", ctx.config.model);
    let reply = client.generate(PROBE_PROMPT);

    if is_api_error(&reply) {
        return Err(SparkError::ApiError(reply));
    }

    if reply.trim().to_lowercase() != "test ok" {
        return Err(SparkError::ApiError(format!(
            "unexpected probe response: '{}'",
            reply.trim()
        )));
    }

    println!("Test successful!");
    println!();
    println!("SUCCESS: the agent is ready to use (model: {})", ctx.config.model);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_key_shows_only_the_edges() {
        let key = "0123456789ABCDEFGHIJKLMNOPQRSTuvwxyz";
        assert_eq!(mask_key(key), "0123456789...uvwxyz");
    }

    #[test]
    fn probe_prompt_asks_for_a_fixed_reply() {
        assert!(PROBE_PROMPT.contains("test ok"));
    }
}
