//! Final rendering: the third generation call of the pipeline.
//!
//! Embeds the plan verbatim and a fixed four-line output template, and
//! asks the model to fill the template exactly in the stored tone. The
//! result is returned without validation; error-sentinel strings flow
//! through unchanged, same as in planning.

use crate::gemini::TextGenerator;

/// Build the rendering prompt around a plan.
fn render_prompt_text(plan: &str, tone: &str) -> String {
    format!(
        r#"Generate a writing prompt using this structure:

{plan}

Format output EXACTLY as:
✨ **Prompt Idea**: [Hook sentence]
❓ **Explore**: [Open-ended question]
⚡ **Challenge**: [Actionable task]
💡 **Tip**: [Brief advice]

Use tone: {tone}"#,
    )
}

/// Render the final user-facing prompt from a plan.
pub fn render_prompt(generator: &dyn TextGenerator, plan: &str, tone: &str) -> String {
    generator.generate(&render_prompt_text(plan, tone))
}
