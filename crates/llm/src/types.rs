use serde::{Deserialize, Serialize};

/// Hugging Face summarization request
#[derive(Debug, Clone, Serialize)]
pub struct SummarizationRequest {
    /// Text to summarize
    pub inputs: String,

    /// Generation parameters
    pub parameters: SummarizationParameters,
}

/// Hugging Face summarization parameters
#[derive(Debug, Clone, Serialize)]
pub struct SummarizationParameters {
    /// Minimum summary length in tokens
    pub min_length: u32,

    /// Maximum summary length in tokens
    pub max_length: u32,

    /// Greedy decoding when false
    pub do_sample: bool,
}

/// One element of the Hugging Face summarization response array
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationOutput {
    pub summary_text: String,
}

/// Error body returned by the Hugging Face Inference API
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct InferenceError {
    pub error: String,
}

/// Ollama generate request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model name (e.g., "llama3.2", "gemma2")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Disable streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// Generation options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Generation options
#[derive(Debug, Clone, Serialize, Default)]
pub struct GenerateOptions {
    /// Temperature (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i32>,
}

/// Ollama generate response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Model name
    pub model: String,

    /// Generated text
    pub response: String,

    /// Whether generation is complete
    pub done: bool,
}
