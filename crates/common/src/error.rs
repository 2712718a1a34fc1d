/// SumAI error types
#[derive(Debug, thiserror::Error)]
pub enum SumaiError {
    /// Summarization model is not loaded or not reachable
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Summarization model failed while generating
    #[error("Summarization failed: {0}")]
    Summarization(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input text exceeds the configured character limit
    #[error("Input too long: {0}")]
    TextTooLong(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SumaiError {
    /// Create model unavailable error
    pub fn model_unavailable<S: Into<String>>(msg: S) -> Self {
        Self::ModelUnavailable(msg.into())
    }

    /// Create summarization error
    pub fn summarization<S: Into<String>>(msg: S) -> Self {
        Self::Summarization(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create text too long error
    pub fn text_too_long<S: Into<String>>(msg: S) -> Self {
        Self::TextTooLong(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }
}

// HTTP response conversion
impl SumaiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::TextTooLong(_) => 413,
            Self::ModelUnavailable(_) => 500,
            Self::Summarization(_) => 500,
            Self::Config(_) => 500,
            Self::Network(_) => 503,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }

    /// Message shown to API callers, without the variant prefix
    pub fn detail(&self) -> String {
        match self {
            Self::ModelUnavailable(msg)
            | Self::Summarization(msg)
            | Self::InvalidInput(msg)
            | Self::TextTooLong(msg)
            | Self::Config(msg)
            | Self::Network(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(SumaiError::invalid_input("Input text is empty").status_code(), 400);
        assert_eq!(SumaiError::text_too_long("Input text too long").status_code(), 413);
        assert_eq!(SumaiError::model_unavailable("not loaded").status_code(), 500);
        assert_eq!(SumaiError::summarization("boom").status_code(), 500);
        assert_eq!(SumaiError::network("timeout").status_code(), 503);
    }

    #[test]
    fn test_detail_strips_prefix() {
        let err = SumaiError::invalid_input("Input text is empty");
        assert_eq!(err.to_string(), "Invalid input: Input text is empty");
        assert_eq!(err.detail(), "Input text is empty");
    }

    #[test]
    fn test_config_error_is_server_side() {
        let err = SumaiError::config("Model name cannot be empty");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.detail(), "Model name cannot be empty");
    }

    #[test]
    fn test_detail_for_wrapped_errors() {
        let err: SumaiError = anyhow::anyhow!("upstream exploded").into();
        assert_eq!(err.detail(), "upstream exploded");
    }
}
