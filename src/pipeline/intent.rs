//! Intent extraction: the first generation call of the pipeline.
//!
//! The model is asked to return only a JSON object with three string
//! fields. The returned text is untrusted: it is parsed strictly, and any
//! failure (malformed JSON, an error-sentinel string, prose around the
//! object) substitutes a fixed fallback intent instead of aborting the
//! pipeline. The parse failure is reported on stderr for the operator.

use crate::gemini::TextGenerator;
use crate::state::Intent;

/// Build the analysis prompt for one user request.
fn analysis_prompt(user_input: &str) -> String {
    format!(
        r#"Analyze the user's query to extract:
1. Core topic (e.g., "sustainability," "remote work")
2. Desired tone (e.g., "inspirational," "analytical")
3. Specific constraints (e.g., "under 500 words," "for beginners")

Output ONLY JSON: {{"topic": string, "tone": string, "constraints": string}}

User Input: "{}""#,
        user_input
    )
}

/// Extract a structured intent from a free-text request.
///
/// Issues one generation call and strictly parses the response. Returns
/// [`Intent::fallback`] on any parse failure; never fails.
pub fn extract_intent(generator: &dyn TextGenerator, user_input: &str) -> Intent {
    let response = generator.generate(&analysis_prompt(user_input));

    match serde_json::from_str::<Intent>(response.trim()) {
        Ok(intent) => intent,
        Err(e) => {
            eprintln!("Error parsing intent response: {}", e);
            Intent::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompt_embeds_the_request() {
        let prompt = analysis_prompt("a prompt about tea");
        assert!(prompt.contains(r#"User Input: "a prompt about tea""#));
        assert!(prompt.contains("Output ONLY JSON"));
    }
}
