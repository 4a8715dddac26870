//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Recognizer or gazetteer error
    #[error("NLP error: {0}")]
    Nlp(#[from] marginalia_nlp::NlpError),

    /// Parallel extraction error
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<marginalia_extractor::ExtractorError<marginalia_nlp::NlpError>> for CliError {
    fn from(e: marginalia_extractor::ExtractorError<marginalia_nlp::NlpError>) -> Self {
        match e {
            marginalia_extractor::ExtractorError::Recognizer(e) => CliError::Nlp(e),
            marginalia_extractor::ExtractorError::Config(msg) => CliError::Config(msg),
            other => CliError::Extraction(other.to_string()),
        }
    }
}
