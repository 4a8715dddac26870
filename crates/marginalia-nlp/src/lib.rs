//! Marginalia NLP Layer
//!
//! Recognizer implementations and English lexicons for the extraction
//! pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `Recognizer` trait from
//! `marginalia-domain`. Any engine that can label spans and tag tokens can
//! sit behind the trait; the two shipped here need no trained model.
//!
//! # Recognizers
//!
//! - `MockRecognizer`: Scripted, deterministic recognizer for testing
//! - `GazetteerRecognizer`: Dictionary matcher over a list of known names
//!
//! # Examples
//!
//! ```
//! use marginalia_domain::{EntityLabel, Recognizer};
//! use marginalia_nlp::{GazetteerEntry, GazetteerRecognizer};
//!
//! let recognizer = GazetteerRecognizer::new(vec![
//!     GazetteerEntry::new("Gandalf", EntityLabel::Person),
//!     GazetteerEntry::new("Rivendell", EntityLabel::Gpe),
//! ]).unwrap();
//!
//! let spans = recognizer.recognize("Gandalf rode to Rivendell.").unwrap();
//! assert_eq!(spans.len(), 2);
//! ```

#![warn(missing_docs)]

mod error;
pub mod gazetteer;
pub mod lexicon;
pub mod mock;
pub mod tokenize;

pub use error::NlpError;
pub use gazetteer::{GazetteerEntry, GazetteerRecognizer};
pub use lexicon::{english_pronouns, english_stopwords, StopwordList, DETERMINERS};
pub use mock::MockRecognizer;
pub use tokenize::{tag_tokens, word_tokens};
