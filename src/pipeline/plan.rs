//! Prompt planning: the second generation call of the pipeline.
//!
//! Builds a structure directive from the intent and the current state
//! (which already includes the current request's turn). The output is a
//! natural-language structural sketch, treated as opaque text: no parsing,
//! no validation, and error-sentinel strings flow through unchanged so an
//! upstream failure surfaces in the final answer rather than being masked
//! here.

use crate::gemini::TextGenerator;
use crate::state::{AgentState, Intent};

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Build the planning prompt from the intent and the state snapshot.
fn planning_prompt(intent: &Intent, state: &AgentState) -> String {
    let tone_directive = if intent.tone == "casual" {
        "Use emojis for casual"
    } else {
        "Be concise for professional"
    };

    format!(
        r#"You are BlogSpark, a writing prompt assistant. Plan how to generate a prompt based on:

### USER REQUEST ###
Topic: {topic}
Tone: {tone}
Constraints: {constraints}

### AGENT STATE ###
Niches: {niches}
Last Prompts: {history_topics}

### PLANNING STEPS ###
1. If no topic, select from niches or trending topics
2. Avoid repeating last 3 prompts
3. Structure: [Hook] + [Question] + [Challenge]
4. Add tip if constraints exist
5. Adjust for tone: {tone_directive}

Output ONLY the final prompt structure in plain text."#,
        topic = display_or(&intent.topic, "general"),
        tone = display_or(&intent.tone, "neutral"),
        constraints = display_or(&intent.constraints, "none"),
        niches = state.niches.join(", "),
        history_topics = state.history_topics().join(", "),
        tone_directive = tone_directive,
    )
}

/// Produce the structural sketch for the final prompt.
///
/// Returns the generator's text verbatim, sentinel or not.
pub fn plan_prompt(generator: &dyn TextGenerator, intent: &Intent, state: &AgentState) -> String {
    generator.generate(&planning_prompt(intent, state))
}
