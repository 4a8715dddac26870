//! Trait definitions for external interactions
//!
//! The recognition engine is the one collaborator the pipeline cannot do
//! without. Implementations live in other crates.

use crate::{EntitySpan, Token};
use std::sync::Arc;

/// Trait for named-entity recognition and part-of-speech tagging
///
/// Implemented by the infrastructure layer (marginalia-nlp). Callers load a
/// recognizer once and pass it into the extractor; nothing here is global.
pub trait Recognizer {
    /// Error type for recognition operations
    type Error;

    /// Find labelled entity spans in a paragraph
    fn recognize(&self, paragraph: &str) -> Result<Vec<EntitySpan>, Self::Error>;

    /// Split text into tokens tagged with part of speech
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error>;
}

impl<R: Recognizer + ?Sized> Recognizer for &R {
    type Error = R::Error;

    fn recognize(&self, paragraph: &str) -> Result<Vec<EntitySpan>, Self::Error> {
        (**self).recognize(paragraph)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).tokenize(text)
    }
}

impl<R: Recognizer + ?Sized> Recognizer for Arc<R> {
    type Error = R::Error;

    fn recognize(&self, paragraph: &str) -> Result<Vec<EntitySpan>, Self::Error> {
        (**self).recognize(paragraph)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).tokenize(text)
    }
}
