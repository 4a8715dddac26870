//! Paragraph segmentation

/// Splits document text into paragraphs
#[derive(Debug, Clone)]
pub struct ParagraphSegmenter {
    delimiter: String,
}

impl ParagraphSegmenter {
    /// Create a segmenter for a paragraph-break marker
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Split text into ordered paragraphs
    ///
    /// Blank paragraphs carry no mentions and are skipped, so empty or
    /// whitespace-only text yields nothing.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split(self.delimiter.as_str())
            .filter(|p| !p.trim().is_empty())
            .collect()
    }
}

impl Default for ParagraphSegmenter {
    fn default() -> Self {
        Self::new("\n\n")
    }
}
