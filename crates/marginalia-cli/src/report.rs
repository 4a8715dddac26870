//! The "knowledge so far" payload.

use marginalia_domain::ClassifiedResult;
use serde::{Deserialize, Serialize};

/// Entities known to a reader at their current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeReport {
    /// Book title
    pub title: String,

    /// Author's full name
    pub author: String,

    /// Pages in the document
    pub page_count: usize,

    /// Page the reader has reached
    pub current_page: usize,

    /// Characters met so far
    pub characters: Vec<String>,

    /// Groups met so far
    pub groups: Vec<String>,

    /// Locations visited so far
    pub locations: Vec<String>,

    /// Events so far
    pub events: Vec<String>,
}

impl KnowledgeReport {
    /// Build a report from classified entities
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        page_count: usize,
        current_page: usize,
        result: ClassifiedResult,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            page_count,
            current_page,
            characters: result.characters.into_iter().collect(),
            groups: result.groups.into_iter().collect(),
            locations: result.locations.into_iter().collect(),
            events: result.events.into_iter().collect(),
        }
    }
}
