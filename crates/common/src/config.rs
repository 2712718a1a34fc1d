use crate::error::SumaiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default character cap on incoming text
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Which inference service hosts the summarization model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelBackend {
    /// Hugging Face Inference API (or a compatible self-hosted endpoint)
    HuggingFace,
    /// Local Ollama server
    Ollama,
}

impl ModelBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HuggingFace => "huggingface",
            Self::Ollama => "ollama",
        }
    }
}

impl fmt::Display for ModelBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelBackend {
    type Err = SumaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Self::HuggingFace),
            "ollama" => Ok(Self::Ollama),
            other => Err(SumaiError::config(format!(
                "Unknown model backend '{}' (expected huggingface or ollama)",
                other
            ))),
        }
    }
}

/// SumAI application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Inference backend
    pub model_backend: ModelBackend,

    /// Summarization model name
    pub model_name: String,

    /// Inference service base URL
    pub model_base_url: String,

    /// Bearer token for the Hugging Face Inference API
    pub hf_api_token: Option<String>,

    /// Timeout for a single summarization call
    pub model_timeout_secs: u64,

    /// Maximum accepted input length, in characters
    pub max_input_chars: usize,

    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            model_backend: ModelBackend::HuggingFace,
            model_name: "facebook/bart-large-cnn".to_string(),
            model_base_url: "https://api-inference.huggingface.co".to_string(),
            hf_api_token: None,
            model_timeout_secs: 120,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SumaiError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let model_backend = match std::env::var("MODEL_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.model_backend,
        };

        let config = Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT").unwrap_or(defaults.server_port),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            model_backend,
            model_name: std::env::var("MODEL_NAME").unwrap_or(defaults.model_name),
            model_base_url: std::env::var("MODEL_BASE_URL").unwrap_or(defaults.model_base_url),
            hf_api_token: std::env::var("HF_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            model_timeout_secs: Self::get_env_parsed("MODEL_TIMEOUT_SECS")
                .unwrap_or(defaults.model_timeout_secs),
            max_input_chars: Self::get_env_parsed("MAX_INPUT_CHARS")
                .unwrap_or(defaults.max_input_chars),
            cors_origins: std::env::var("CORS_ORIGINS")
                .ok()
                .map(|value| parse_origins(&value))
                .unwrap_or(defaults.cors_origins),
        };

        config.ensure_directories()?;

        Ok(config)
    }

    /// Load configuration from a file (TOML, YAML or JSON, by extension)
    ///
    /// Keys missing from the file keep their default values.
    pub fn from_file(path: &Path) -> Result<Self, SumaiError> {
        let config: Self = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| {
                SumaiError::config(format!(
                    "Failed to load config file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        config.ensure_directories()?;

        Ok(config)
    }

    /// Parse an environment variable, ignoring unparsable values
    fn get_env_parsed<T: FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.parse().ok())
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), SumaiError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                SumaiError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SumaiError> {
        if self.model_name.trim().is_empty() {
            return Err(SumaiError::config("Model name cannot be empty"));
        }

        if !self.model_base_url.starts_with("http://")
            && !self.model_base_url.starts_with("https://")
        {
            return Err(SumaiError::config(
                "Model base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(SumaiError::config("Server port cannot be 0"));
        }

        if self.max_input_chars == 0 {
            return Err(SumaiError::config("Maximum input length cannot be 0"));
        }

        if self.model_timeout_secs == 0 {
            return Err(SumaiError::config("Model timeout cannot be 0"));
        }

        Ok(())
    }
}

/// Split a comma separated origin list
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
