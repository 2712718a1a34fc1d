use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use sumai_common::{ModelBackend, Result, SumaiError};
use sumai_format::GenerationBounds;
use tracing::{debug, info, warn};

use crate::model::SummaryModel;
use crate::types::{
    InferenceError, SummarizationOutput, SummarizationParameters, SummarizationRequest,
};

/// Hugging Face Inference API client for seq2seq summarization models
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    base_url: String,
    model: String,
    api_token: Option<String>,
    client: Client,
}

impl HuggingFaceClient {
    /// Create new Hugging Face client
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Hugging Face client initialized: {} ({})", base_url, model);
        Ok(Self {
            base_url,
            model,
            api_token,
            client,
        })
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl SummaryModel for HuggingFaceClient {
    async fn summarize_raw(&self, text: &str, bounds: GenerationBounds) -> Result<String> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let request = SummarizationRequest {
            inputs: text.to_string(),
            parameters: SummarizationParameters {
                min_length: bounds.min_len,
                max_length: bounds.max_len,
                do_sample: false,
            },
        };

        debug!(
            "Sending summarization request - Model: {}, Text length: {}, Bounds: {}-{}",
            self.model,
            text.len(),
            bounds.min_len,
            bounds.max_len
        );

        let response = self
            .with_auth(self.client.post(&url))
            .json(&request)
            .send()
            .await
            .map_err(|e| SumaiError::summarization(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<InferenceError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            warn!("Model API returned {}: {}", status, message);
            return Err(SumaiError::summarization(format!(
                "Model API error ({}): {}",
                status, message
            )));
        }

        let outputs: Vec<SummarizationOutput> = response
            .json()
            .await
            .map_err(|e| SumaiError::summarization(format!("Failed to parse response: {}", e)))?;

        let summary = outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| SumaiError::summarization("Empty summary from model"))?;

        debug!("Received summary - Length: {}", summary.len());
        Ok(summary)
    }

    async fn check_ready(&self) -> Result<bool> {
        let url = format!("{}/status/{}", self.base_url, self.model);

        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(|e| SumaiError::network(format!("Failed to reach model API: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn backend(&self) -> ModelBackend {
        ModelBackend::HuggingFace
    }
}
