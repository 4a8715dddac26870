//! Reading-progress windows over a plain-text document.

/// A document split into pages
///
/// Each paragraph-break marker ends a page, matching how the extractor
/// segments text, so a window never cuts a paragraph in half.
#[derive(Debug, Clone)]
pub struct ReadingWindow<'t> {
    text: &'t str,
    delimiter: String,
    pages: Vec<&'t str>,
}

impl<'t> ReadingWindow<'t> {
    /// Split text into pages
    pub fn new(text: &'t str, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        let pages = if text.trim().is_empty() {
            Vec::new()
        } else {
            text.split(delimiter.as_str()).collect()
        };
        Self {
            text,
            delimiter,
            pages,
        }
    }

    /// All pages in order
    pub fn pages(&self) -> &[&'t str] {
        &self.pages
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of the first `current_page` pages
    ///
    /// Pages past the end are clamped; page 0 is empty.
    pub fn up_to(&self, current_page: usize) -> String {
        let end = current_page.min(self.pages.len());
        self.pages[..end].join(&self.delimiter)
    }

    /// The last `span` pages up to and including `current_page`
    pub fn recap(&self, current_page: usize, span: usize) -> String {
        let end = current_page.min(self.pages.len());
        let start = end.saturating_sub(span);
        self.pages[start..end].join(&self.delimiter)
    }

    /// Page count estimated from the word count
    ///
    /// At least one page for non-empty text.
    pub fn estimated_page_count(&self, words_per_page: usize) -> usize {
        let words = self.text.split_whitespace().count();
        if words == 0 {
            return 0;
        }
        (words / words_per_page.max(1)).max(1)
    }
}
