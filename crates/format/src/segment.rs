use once_cell::sync::Lazy;
use regex::Regex;

/// A run of terminal punctuation ends a sentence
static SENTENCE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence delimiter pattern is valid"));

/// Split text into trimmed, non-empty sentences
///
/// Consecutive `.`, `!` and `?` count as one delimiter. The delimiters
/// themselves are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rejoin sentences with `". "` and close with a single period
///
/// No sentences yields an empty string, never a bare `"."`.
pub fn join_sentences<S: AsRef<str>>(sentences: &[S]) -> String {
    if sentences.is_empty() {
        return String::new();
    }

    let body = sentences
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(". ");

    format!("{}.", body)
}
