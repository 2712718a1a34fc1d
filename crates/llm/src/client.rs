use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use sumai_common::{ModelBackend, Result, SumaiError};
use sumai_format::GenerationBounds;
use tracing::{debug, info};

use crate::model::SummaryModel;
use crate::prompts::summary_prompt;
use crate::types::{GenerateOptions, GenerateRequest, GenerateResponse};

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama client initialized: {} ({})", base_url, model);
        Ok(Self {
            base_url,
            model,
            client,
        })
    }

    /// Generate text with Ollama (single attempt)
    pub async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| SumaiError::summarization(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| SumaiError::summarization(format!("Ollama API error: {}", e)))?;

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SumaiError::summarization(format!("Failed to parse response: {}", e)))?;

        if result.response.trim().is_empty() {
            return Err(SumaiError::summarization("Empty response from Ollama"));
        }

        debug!(
            "Received response from Ollama - Model: {}, Length: {}, Done: {}",
            result.model,
            result.response.len(),
            result.done
        );

        Ok(result.response)
    }
}

#[async_trait]
impl SummaryModel for OllamaClient {
    async fn summarize_raw(&self, text: &str, bounds: GenerationBounds) -> Result<String> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: summary_prompt(text, bounds),
            stream: Some(false),
            options: Some(GenerateOptions {
                temperature: Some(0.0),
                num_predict: Some(bounds.max_len as i32),
            }),
        };

        let response = self.generate(request).await?;

        // Chat models like to wrap output in newlines
        Ok(response.trim().replace('\n', " "))
    }

    async fn check_ready(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SumaiError::network(format!("Failed to connect to Ollama: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn backend(&self) -> ModelBackend {
        ModelBackend::Ollama
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OllamaClient {
        OllamaClient::new(server.uri(), "llama3.2", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_summarize_uses_generate_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama3.2",
                "stream": false,
                "options": { "num_predict": 150 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "llama3.2",
                "response": "\nCats sleep a lot.\nThey are mammals.\n",
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client_for(&server)
            .summarize_raw("Cats...", GenerationBounds::new(50, 150))
            .await
            .unwrap();

        assert_eq!(summary, "Cats sleep a lot. They are mammals.");
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .summarize_raw("text", GenerationBounds::new(20, 80))
            .await
            .unwrap_err();

        assert!(matches!(err, SumaiError::Summarization(_)));
    }

    #[tokio::test]
    async fn test_empty_response_is_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "llama3.2",
                "response": "  ",
                "done": true
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .summarize_raw("text", GenerationBounds::new(20, 80))
            .await
            .unwrap_err();

        assert_eq!(err.detail(), "Empty response from Ollama");
    }

    #[tokio::test]
    async fn test_check_ready() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "models": []
            })))
            .mount(&server)
            .await;

        assert!(client_for(&server).check_ready().await.unwrap());
    }
}
