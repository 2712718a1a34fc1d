use async_trait::async_trait;
use std::sync::Mutex;
use sumai_common::{ModelBackend, Result, SumaiError};
use sumai_format::GenerationBounds;
use sumai_llm::SummaryModel;

/// Canned model that records every call
pub(crate) struct StubModel {
    reply: std::result::Result<String, String>,
    calls: Mutex<Vec<(String, GenerationBounds)>>,
}

impl StubModel {
    pub fn replying(summary: &str) -> Self {
        Self {
            reply: Ok(summary.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerationBounds)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryModel for StubModel {
    async fn summarize_raw(&self, text: &str, bounds: GenerationBounds) -> Result<String> {
        self.calls.lock().unwrap().push((text.to_string(), bounds));
        self.reply.clone().map_err(SumaiError::summarization)
    }

    async fn check_ready(&self) -> Result<bool> {
        Ok(true)
    }

    fn model_name(&self) -> &str {
        "stub"
    }

    fn backend(&self) -> ModelBackend {
        ModelBackend::HuggingFace
    }
}
