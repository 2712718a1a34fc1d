use std::sync::Arc;
use sumai_common::{Result, SumaiError};
use sumai_format::Presentation;
use sumai_llm::SummaryModel;
use tracing::{debug, error, info};

/// Check incoming text before any model work
///
/// Rejects blank text and text longer than `max_chars` characters.
pub fn validate_text(text: &str, max_chars: usize) -> Result<()> {
    if text.trim().is_empty() {
        return Err(SumaiError::invalid_input("Input text is empty"));
    }

    if text.chars().count() > max_chars {
        return Err(SumaiError::text_too_long("Input text too long"));
    }

    Ok(())
}

/// Per-request summarization flow
///
/// Picks generation bounds from the length preference, calls the model once,
/// then renders the raw summary. A model failure aborts the whole request.
#[derive(Clone)]
pub struct SummaryPipeline {
    model: Arc<dyn SummaryModel>,
}

impl SummaryPipeline {
    pub fn new(model: Arc<dyn SummaryModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &dyn SummaryModel {
        self.model.as_ref()
    }

    /// Summarize already validated text
    pub async fn run(&self, text: &str, presentation: Presentation) -> Result<String> {
        info!(
            "Request: tone={}, length={}, purpose={}",
            presentation.tone, presentation.length, presentation.purpose
        );

        let bounds = presentation.length.bounds();
        let raw_summary = self
            .model
            .summarize_raw(text, bounds)
            .await
            .inspect_err(|e| error!("Summarization failed: {}", e))?;

        debug!("Raw summary length: {} chars", raw_summary.len());

        Ok(presentation.render(&raw_summary))
    }
}
