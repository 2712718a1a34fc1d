//! SumAI model integration
//!
//! The summarization model runs out of process. This crate defines the
//! `SummaryModel` seam and the HTTP clients behind it.

mod client;
mod huggingface;
mod model;
mod prompts;
mod types;

pub use client::OllamaClient;
pub use huggingface::HuggingFaceClient;
pub use model::{build_model, SummaryModel};
pub use prompts::summary_prompt;
pub use types::{
    GenerateOptions, GenerateRequest, GenerateResponse, SummarizationParameters,
    SummarizationRequest, SummarizationOutput,
};
