//! Scripted recognizer for deterministic testing

use crate::error::NlpError;
use crate::lexicon::StopwordList;
use crate::tokenize::{tag_tokens, word_tokens};
use marginalia_domain::{EntitySpan, Recognizer, Token};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// Mock recognizer for deterministic testing
///
/// Spans and tokens are scripted per paragraph text. Paragraphs without a
/// span script produce no spans; text without a token script is tokenized
/// with the capitalization heuristic. State is shared between clones, so a
/// clone handed to a worker shares its call count with the first.
///
/// # Examples
///
/// ```
/// use marginalia_domain::{EntityLabel, EntitySpan, Recognizer};
/// use marginalia_nlp::MockRecognizer;
///
/// let mut recognizer = MockRecognizer::new();
/// recognizer.add_spans("Gandalf smiled.", vec![EntitySpan::new("Gandalf", EntityLabel::Person)]);
///
/// assert_eq!(recognizer.recognize("Gandalf smiled.").unwrap().len(), 1);
/// assert!(recognizer.recognize("Nobody came.").unwrap().is_empty());
/// assert_eq!(recognizer.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer {
    spans: Arc<Mutex<HashMap<String, Vec<EntitySpan>>>>,
    tokens: Arc<Mutex<HashMap<String, Vec<Token>>>>,
    failures: Arc<Mutex<HashSet<String>>>,
    call_count: Arc<Mutex<usize>>,
    stopwords: StopwordList,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockRecognizer {
    /// Create a recognizer with no scripts
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the spans returned for a paragraph
    pub fn add_spans(&mut self, paragraph: impl Into<String>, spans: Vec<EntitySpan>) {
        lock(&self.spans).insert(paragraph.into(), spans);
    }

    /// Script the tokens returned for a piece of text
    pub fn add_tokens(&mut self, text: impl Into<String>, tokens: Vec<Token>) {
        lock(&self.tokens).insert(text.into(), tokens);
    }

    /// Make recognition and tokenization of a paragraph fail
    pub fn add_failure(&mut self, paragraph: impl Into<String>) {
        lock(&self.failures).insert(paragraph.into());
    }

    /// Get the number of times recognize was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }

    fn check_failure(&self, text: &str) -> Result<(), NlpError> {
        if lock(&self.failures).contains(text) {
            return Err(NlpError::Recognition(format!(
                "Mock failure for '{}'",
                text
            )));
        }
        Ok(())
    }

    fn is_scripted_name(&self, word: &str) -> bool {
        lock(&self.spans)
            .values()
            .flatten()
            .any(|span| word_tokens(&span.text).contains(&word))
    }
}

impl Recognizer for MockRecognizer {
    type Error = NlpError;

    fn recognize(&self, paragraph: &str) -> Result<Vec<EntitySpan>, Self::Error> {
        *lock(&self.call_count) += 1;
        self.check_failure(paragraph)?;

        Ok(lock(&self.spans).get(paragraph).cloned().unwrap_or_default())
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        self.check_failure(text)?;

        if let Some(tokens) = lock(&self.tokens).get(text) {
            return Ok(tokens.clone());
        }

        Ok(tag_tokens(text, &self.stopwords, |word| {
            self.is_scripted_name(word)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marginalia_domain::{EntityLabel, PosTag};

    #[test]
    fn test_mock_scripted_spans() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans(
            "Frodo went to Bree.",
            vec![
                EntitySpan::new("Frodo", EntityLabel::Person),
                EntitySpan::new("Bree", EntityLabel::Gpe),
            ],
        );

        let spans = recognizer.recognize("Frodo went to Bree.").unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].label, EntityLabel::Gpe);
    }

    #[test]
    fn test_mock_scripted_tokens() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_tokens("Strider", vec![Token::new("Strider", PosTag::Other)]);

        let tokens = recognizer.tokenize("Strider").unwrap();
        assert_eq!(tokens, vec![Token::new("Strider", PosTag::Other)]);
    }

    #[test]
    fn test_mock_heuristic_tokens_use_scripted_names() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_spans("x", vec![EntitySpan::new("Will Whitfoot", EntityLabel::Person)]);

        let tokens = recognizer.tokenize("Will laughed.").unwrap();
        assert_eq!(tokens[0].pos, PosTag::ProperNoun);
    }

    #[test]
    fn test_mock_failure() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_failure("bad paragraph");

        let result = recognizer.recognize("bad paragraph");
        assert!(matches!(result, Err(NlpError::Recognition(_))));
        assert!(recognizer.tokenize("bad paragraph").is_err());
        assert!(recognizer.recognize("good paragraph").is_ok());
    }

    #[test]
    fn test_mock_call_count_shared_between_clones() {
        let recognizer = MockRecognizer::new();
        let clone = recognizer.clone();

        clone.recognize("one").unwrap();
        recognizer.recognize("two").unwrap();
        assert_eq!(recognizer.call_count(), 2);
        assert_eq!(clone.call_count(), 2);

        recognizer.reset_call_count();
        assert_eq!(clone.call_count(), 0);
    }
}
