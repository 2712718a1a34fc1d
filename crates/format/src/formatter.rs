use serde::{Deserialize, Serialize};

use crate::length::truncate;
use crate::segment::split_sentences;
use crate::types::{Length, Purpose, Tone};

/// Prepend the tone's lead-in phrase
///
/// Applying it twice prefixes twice.
pub fn apply_tone(summary: &str, tone: Tone) -> String {
    match tone.prefix() {
        Some(prefix) => format!("{}{}", prefix, summary),
        None => summary.to_string(),
    }
}

/// Lay out a tone-styled summary for the requested purpose
pub fn format_for_purpose(styled: &str, purpose: Purpose) -> String {
    match purpose {
        Purpose::Tldr => format!("TL;DR: {}", styled),
        Purpose::KeyPoints => {
            let points = split_sentences(styled)
                .iter()
                .map(|sentence| format!("• {}.", sentence))
                .collect::<Vec<_>>()
                .join("\n");
            format!("Key Points:\n{}", points)
        }
        Purpose::Explainer => {
            let sentences = split_sentences(styled)
                .iter()
                .map(|sentence| capitalize_first(sentence))
                .collect::<Vec<_>>();
            format!("Explainer:\n{}.", sentences.join(". "))
        }
    }
}

/// Uppercase the first character, leave the rest alone
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The three presentation preferences of a summary request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Presentation {
    pub tone: Tone,
    pub length: Length,
    pub purpose: Purpose,
}

impl Presentation {
    pub fn new(tone: Tone, length: Length, purpose: Purpose) -> Self {
        Self {
            tone,
            length,
            purpose,
        }
    }

    /// Turn a raw model summary into the final text
    ///
    /// Order is fixed: truncate, then tone, then purpose. Purpose
    /// re-segments the tone-prefixed text.
    pub fn render(&self, raw_summary: &str) -> String {
        let truncated = truncate(raw_summary, self.length);
        let styled = apply_tone(&truncated, self.tone);
        format_for_purpose(&styled, self.purpose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_prefixes() {
        assert_eq!(apply_tone("X.", Tone::Casual), "Here's the gist: X.");
        assert_eq!(apply_tone("X.", Tone::Formal), "In summary: X.");
        assert_eq!(apply_tone("X.", Tone::Professional), "Executive Summary: X.");
        assert_eq!(apply_tone("X.", Tone::Friendly), "Here's what I found: X.");
    }

    #[test]
    fn test_unknown_tone_is_identity() {
        assert_eq!(apply_tone("X.", Tone::from("pirate")), "X.");
    }

    #[test]
    fn test_tone_is_not_idempotent() {
        let once = apply_tone("X.", Tone::Casual);
        let twice = apply_tone(&once, Tone::Casual);
        assert_eq!(twice, "Here's the gist: Here's the gist: X.");
        assert_ne!(once, twice);
    }

    #[test]
    fn test_tldr_prefixes_whole_string() {
        assert_eq!(format_for_purpose("One. Two.", Purpose::Tldr), "TL;DR: One. Two.");
        assert_eq!(format_for_purpose("", Purpose::Tldr), "TL;DR: ");
        assert_eq!(
            format_for_purpose("no punctuation", Purpose::Tldr),
            "TL;DR: no punctuation"
        );
    }

    #[test]
    fn test_keypoints() {
        assert_eq!(
            format_for_purpose("One. Two.", Purpose::KeyPoints),
            "Key Points:\n• One.\n• Two."
        );
    }

    #[test]
    fn test_keypoints_empty() {
        assert_eq!(format_for_purpose("", Purpose::KeyPoints), "Key Points:\n");
        assert_eq!(format_for_purpose("?!", Purpose::KeyPoints), "Key Points:\n");
    }

    #[test]
    fn test_explainer_capitalizes_sentences() {
        assert_eq!(
            format_for_purpose("one. two.", Purpose::Explainer),
            "Explainer:\nOne. Two."
        );
    }

    #[test]
    fn test_explainer_keeps_inner_case() {
        assert_eq!(
            format_for_purpose("the NASA launch! ok?", Purpose::Explainer),
            "Explainer:\nThe NASA launch. Ok."
        );
    }

    #[test]
    fn test_explainer_empty() {
        // The trailing period is always appended, even with no sentences
        assert_eq!(format_for_purpose("...", Purpose::Explainer), "Explainer:\n.");
    }

    #[test]
    fn test_unknown_purpose_is_explainer() {
        assert_eq!(
            format_for_purpose("a. b.", Purpose::from("highlights")),
            "Explainer:\nA. B."
        );
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_render_formal_short_tldr() {
        let presentation = Presentation::new(Tone::Formal, Length::Short, Purpose::Tldr);
        let raw = "Cats are mammals. Cats sleep a lot. Cats are popular pets.";
        assert_eq!(
            presentation.render(raw),
            "TL;DR: In summary: Cats are mammals. Cats sleep a lot."
        );
    }

    #[test]
    fn test_render_tone_prefix_joins_first_keypoint() {
        let presentation = Presentation::new(Tone::Casual, Length::Detailed, Purpose::KeyPoints);
        assert_eq!(
            presentation.render("One. Two."),
            "Key Points:\n• Here's the gist: One.\n• Two."
        );
    }

    #[test]
    fn test_render_explainer_with_tone() {
        let presentation = Presentation::new(Tone::Other, Length::Medium, Purpose::Explainer);
        assert_eq!(
            presentation.render("first point. second point! third? fourth. fifth."),
            "Explainer:\nFirst point. Second point. Third. Fourth."
        );
    }

    #[test]
    fn test_render_explainer_without_sentences() {
        let presentation = Presentation::new(Tone::Other, Length::Detailed, Purpose::Explainer);
        assert_eq!(presentation.render("?!"), "Explainer:\n.");
    }

    #[test]
    fn test_render_empty_truncation_still_gets_tone() {
        let presentation = Presentation::new(Tone::Formal, Length::Short, Purpose::Tldr);
        assert_eq!(presentation.render("..."), "TL;DR: In summary: ");
    }
}
