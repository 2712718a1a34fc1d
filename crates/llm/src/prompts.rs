//! Prompt templates for chat-style backends

use sumai_format::GenerationBounds;

/// Instruction for a neutral, factual summary
pub const SUMMARY_INSTRUCTION: &str = "You are a precise summarizer. Summarize the text below in plain prose. \
Stick to facts stated in the text. Do not add headings, bullet points, or commentary.";

/// Prompt asking for a summary within the given bounds
///
/// Bounds are model tokens; the prompt expresses them as an approximate
/// word range since chat models do not count tokens.
pub fn summary_prompt(text: &str, bounds: GenerationBounds) -> String {
    format!(
        "{}\n\nLength: roughly {} to {} words.\n\nText:\n---\n{}\n---\n\nSummary:",
        SUMMARY_INSTRUCTION,
        bounds.min_len * 3 / 4,
        bounds.max_len * 3 / 4,
        text
    )
}
