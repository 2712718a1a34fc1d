use serde::{Deserialize, Serialize};
use sumai_format::{Length, Presentation, Purpose, Tone};

/// Summarization request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Text to summarize
    pub text: String,

    /// Tone (casual, formal, professional, friendly)
    pub tone: Tone,

    /// Length (short, medium, detailed)
    pub length: Length,

    /// Purpose (tldr, keypoints, explainer)
    pub purpose: Purpose,
}

impl SummaryRequest {
    pub fn presentation(&self) -> Presentation {
        Presentation::new(self.tone, self.length, self.purpose)
    }
}

/// Summarization response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Final formatted summary
    pub summary: String,
}

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    /// Whether the model was loaded at startup
    pub model_loaded: bool,

    /// Inference backend name
    pub backend: Option<String>,

    /// Model identifier
    pub model: Option<String>,

    pub message: String,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
