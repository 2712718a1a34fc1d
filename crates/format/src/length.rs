use tracing::debug;

use crate::segment::{join_sentences, split_sentences};
use crate::types::Length;

/// Cap a raw summary at the sentence count allowed by `length`
///
/// `Detailed` returns the input untouched. Otherwise the kept sentences are
/// rejoined with `". "` and a trailing period; if nothing survives
/// segmentation the result is empty.
pub fn truncate(summary: &str, length: Length) -> String {
    let Some(cap) = length.sentence_cap() else {
        return summary.to_string();
    };

    let sentences = split_sentences(summary);
    let kept = &sentences[..sentences.len().min(cap)];

    debug!(
        "Truncating summary to {} sentence(s) - Found: {}, Kept: {}",
        cap,
        sentences.len(),
        kept.len()
    );

    join_sentences(kept)
}
