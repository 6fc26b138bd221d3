//! Generation capability for blogspark.
//!
//! The pipeline talks to exactly one external collaborator: a hosted
//! text-generation endpoint. This module defines the seam the pipeline
//! depends on (`TextGenerator`) and the production implementation backed by
//! the Gemini REST API (`GeminiClient`).
//!
//! # Failure contract
//!
//! `generate` never returns an error. Any transport, authentication, or
//! provider failure yields a plain string beginning with [`API_ERROR_PREFIX`]
//! followed by a human-readable cause. Callers that need structured data
//! must treat every returned string as untrusted and parse defensively; the
//! generation call is the sole point of non-determinism in the system.

mod http;

pub use http::{GeminiClient, ModelInfo};

/// Fixed prefix marking a generation failure surfaced as text.
pub const API_ERROR_PREFIX: &str = "API Error: ";

/// The single operation the pipeline requires from a generation backend.
///
/// Implementations must be infallible at the type level: failures are
/// reported in-band as sentinel strings (see [`API_ERROR_PREFIX`]).
pub trait TextGenerator {
    /// Send one prompt and return the model's text completion, or an
    /// error-sentinel string on any failure.
    fn generate(&self, prompt: &str) -> String;
}

/// Whether a generation result is an error-sentinel string.
pub fn is_api_error(text: &str) -> bool {
    text.starts_with(API_ERROR_PREFIX)
}
