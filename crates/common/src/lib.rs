pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, ModelBackend};
pub use error::SumaiError;
pub type Result<T> = std::result::Result<T, SumaiError>;
