//! SumAI summary formatting
//!
//! Turns a raw model summary into the text returned to the user:
//! sentence segmentation, length truncation, tone prefix and purpose layout.

pub mod formatter;
pub mod length;
pub mod segment;
pub mod types;

// Re-export main types
pub use formatter::{apply_tone, format_for_purpose, Presentation};
pub use length::truncate;
pub use segment::{join_sentences, split_sentences};
pub use types::{GenerationBounds, Length, Purpose, Tone};
