//! Error types for recognizers

use thiserror::Error;

/// Errors that can occur during recognition
#[derive(Error, Debug)]
pub enum NlpError {
    /// Recognition failed for a paragraph
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// Gazetteer could not be built
    #[error("Gazetteer error: {0}")]
    Gazetteer(String),

    /// Gazetteer file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Gazetteer file is not valid TOML
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
