use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use sumai_common::{AppConfig, ModelBackend, Result};
use sumai_format::GenerationBounds;
use tracing::info;

use crate::client::OllamaClient;
use crate::huggingface::HuggingFaceClient;

/// Abstractive summarization model
///
/// Implementations are created once at startup and shared read-only
/// across requests.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Summarize `text` within the given generation bounds
    async fn summarize_raw(&self, text: &str, bounds: GenerationBounds) -> Result<String>;

    /// Check whether the model can serve requests
    async fn check_ready(&self) -> Result<bool>;

    /// Model identifier
    fn model_name(&self) -> &str;

    /// Backend hosting the model
    fn backend(&self) -> ModelBackend;
}

/// Build the configured model client
pub fn build_model(config: &AppConfig) -> Result<Arc<dyn SummaryModel>> {
    let timeout = Duration::from_secs(config.model_timeout_secs);

    info!(
        "Building summarization model - Backend: {}, Model: {}",
        config.model_backend, config.model_name
    );

    let model: Arc<dyn SummaryModel> = match config.model_backend {
        ModelBackend::HuggingFace => Arc::new(HuggingFaceClient::new(
            &config.model_base_url,
            &config.model_name,
            config.hf_api_token.clone(),
            timeout,
        )?),
        ModelBackend::Ollama => Arc::new(OllamaClient::new(
            &config.model_base_url,
            &config.model_name,
            timeout,
        )?),
    };

    Ok(model)
}
