use std::sync::Arc;
use sumai_common::AppConfig;
use sumai_llm::SummaryModel;

use crate::pipeline::SummaryPipeline;

/// Shared application state
///
/// Built once at startup. `pipeline` is `None` when the model could not be
/// loaded; it is never replaced afterwards.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization pipeline, if the model is available
    pub pipeline: Option<SummaryPipeline>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, model: Option<Arc<dyn SummaryModel>>) -> Self {
        Self {
            config,
            pipeline: model.map(SummaryPipeline::new),
        }
    }

    /// Whether the summarization model was loaded at startup
    pub fn model_loaded(&self) -> bool {
        self.pipeline.is_some()
    }
}
