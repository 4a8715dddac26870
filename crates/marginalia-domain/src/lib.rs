//! Marginalia Domain Layer
//!
//! This crate contains the vocabulary shared by every other Marginalia crate:
//! recognizer labels, part-of-speech tags, raw mentions, the classified
//! result buckets, and the `Recognizer` trait that stands in for the
//! named-entity recognition engine.
//!
//! ## Key Concepts
//!
//! - **EntitySpan**: A labelled span returned by a recognizer
//! - **Token**: A word with its part-of-speech tag and capitalization
//! - **RawMention**: A span or token that may become an entity
//! - **ClassifiedResult**: Characters, groups, locations and events
//!
//! ## Architecture
//!
//! No external crate dependencies. Recognition engines live in
//! `marginalia-nlp`, the pipeline lives in `marginalia-extractor`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod label;
pub mod mention;
pub mod result;
pub mod traits;

// Re-exports for convenience
pub use label::{EntityLabel, MentionLabel, MentionPool, PosTag};
pub use mention::{EntitySpan, RawMention, Token};
pub use result::{ClassifiedResult, EntityBucket};
pub use traits::Recognizer;
