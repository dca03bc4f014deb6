//! Error types for the CLI.

use randomize_core::types::{DateError, GeneratorError, VocabularyError};
use randomize_generators::export::ExportError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generator rejected its parameters
    #[error("Generation error: {0}")]
    Generator(#[from] GeneratorError),

    /// Export failed
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Unparseable date argument
    #[error("{0}")]
    Date(#[from] DateError),

    /// Unknown vocabulary value
    #[error("{0}")]
    Vocabulary(#[from] VocabularyError),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("unknown format: xml");
        assert_eq!(err.to_string(), "Invalid argument: unknown format: xml");
    }

    #[test]
    fn test_generator_error_converts() {
        let err: CliError = GeneratorError::invalid_parameter("length", "must be at least 1").into();
        assert!(err.to_string().contains("length"));
    }
}
