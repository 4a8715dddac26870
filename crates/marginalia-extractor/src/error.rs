//! Error types for the EntityExtractor
//!
//! The sequential path returns the recognizer's own error unchanged. This
//! type only wraps it where extraction adds failure modes of its own.

use thiserror::Error;

/// Errors that can occur during parallel extraction or setup
#[derive(Error, Debug)]
pub enum ExtractorError<E> {
    /// Recognizer failed on a paragraph
    #[error("Recognizer error: {0}")]
    Recognizer(E),

    /// A recognition worker panicked or was cancelled
    #[error("Worker join error: {0}")]
    Join(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
