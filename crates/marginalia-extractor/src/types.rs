//! Extraction reports

use marginalia_domain::ClassifiedResult;
use serde::{Deserialize, Serialize};

/// Counters collected while running the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Non-blank paragraphs processed
    pub paragraphs: usize,

    /// Mentions produced by the harvester
    pub mentions_harvested: usize,

    /// Mentions that passed the noise filter
    pub mentions_admitted: usize,

    /// Distinct person/group surface forms counted
    pub candidates_counted: usize,

    /// Candidates that met the occurrence threshold
    pub candidates_above_threshold: usize,

    /// Candidates dropped by the classifier
    pub rejected: usize,

    /// Wall-clock time spent (milliseconds)
    pub elapsed_ms: u64,
}

/// Result of an extraction together with its counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Classified entities
    pub result: ClassifiedResult,

    /// Pipeline counters
    pub stats: ExtractionStats,
}
