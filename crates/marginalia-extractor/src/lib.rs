//! Marginalia Extractor
//!
//! Extracts characters, groups, locations and events from long-form text.
//!
//! # Overview
//!
//! A reading application hands the extractor the part of a book the reader
//! has reached plus the author's name, and gets back four sets of canonical
//! entity names for a "who/where/what so far" summary.
//!
//! # Architecture
//!
//! ```text
//! Text → Segmenter → Harvester → Noise Filter → Aggregator → Classifier → Normalizer
//!                       ↑                                        ↑
//!                       └────────────── Recognizer ──────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Threshold Gate**: Person/group candidates need three occurrences
//! - **Immediate Buckets**: Locations and events are kept on first sight
//! - **Precedence**: Groups beat characters, characters beat locations
//! - **Parallel Recognition**: Paragraphs can be recognized on a worker pool
//!
//! # Example Usage
//!
//! ```
//! use marginalia_domain::{EntityLabel, EntitySpan};
//! use marginalia_extractor::classify_entities;
//! use marginalia_nlp::MockRecognizer;
//!
//! let mut recognizer = MockRecognizer::new();
//! recognizer.add_spans(
//!     "Gandalf knocked.",
//!     vec![EntitySpan::new("Gandalf", EntityLabel::Person)],
//! );
//!
//! let content = "Gandalf knocked.\n\nGandalf knocked.\n\nGandalf knocked.";
//! let result = classify_entities(&recognizer, content, "J.R.R. Tolkien").unwrap();
//!
//! assert!(result.characters.contains("Gandalf"));
//! ```

#![warn(missing_docs)]

mod aggregator;
mod classifier;
mod config;
mod error;
mod extractor;
mod filter;
mod harvester;
mod normalizer;
mod segmenter;
mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{route, CandidateEntity, FrequencyTable, MentionPools};
pub use classifier::{
    remove_character_locations, CategoryClassifier, Classification, ClassifiedCandidates,
    RejectReason,
};
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{classify_entities, EntityExtractor};
pub use filter::FilterContext;
pub use harvester::{harvest, harvest_paragraph, harvest_recognized};
pub use normalizer::{canonicalize, resolve_conflicts, Normalizer};
pub use segmenter::ParagraphSegmenter;
pub use types::{ExtractionReport, ExtractionStats};
