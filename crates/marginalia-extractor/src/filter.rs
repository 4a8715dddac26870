//! Noise filter applied to every mention before it enters a pool

use marginalia_domain::RawMention;
use marginalia_nlp::StopwordList;
use std::collections::HashSet;

/// Words that can never become entities in one extraction
///
/// Built once per call from the author's name and the extractor's lexicons.
#[derive(Debug, Clone)]
pub struct FilterContext<'a> {
    author_name_tokens: HashSet<String>,
    stopwords: &'a StopwordList,
    pronouns: &'a HashSet<String>,
}

impl<'a> FilterContext<'a> {
    /// Create a filter for one author
    pub fn new(
        author_name: &str,
        stopwords: &'a StopwordList,
        pronouns: &'a HashSet<String>,
    ) -> Self {
        // "J.R.R." may be tokenized without its final period, so both
        // spellings are kept.
        let author_name_tokens = author_name
            .to_lowercase()
            .split_whitespace()
            .flat_map(|token| {
                let bare = token.trim_matches(|c: char| !c.is_alphanumeric());
                [token.to_string(), bare.to_string()]
            })
            .filter(|token| !token.is_empty())
            .collect();

        Self {
            author_name_tokens,
            stopwords,
            pronouns,
        }
    }

    /// Lowercased tokens of the author's name
    pub fn author_name_tokens(&self) -> &HashSet<String> {
        &self.author_name_tokens
    }

    /// Whether a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Whether a word is a pronoun
    pub fn is_pronoun(&self, word: &str) -> bool {
        self.pronouns.contains(&word.to_lowercase())
    }

    /// Whether text equals one token of the author's name
    pub fn is_author_token(&self, text: &str) -> bool {
        self.author_name_tokens.contains(&text.to_lowercase())
    }

    /// Whether text should be discarded as noise
    pub fn is_noise(&self, text: &str) -> bool {
        text.chars().count() <= 1
            || self.is_stopword(text)
            || self.is_pronoun(text)
            || self.is_author_token(text)
    }

    /// Keep only mentions that are not noise
    pub fn admit(&self, mentions: Vec<RawMention>) -> Vec<RawMention> {
        mentions
            .into_iter()
            .filter(|m| !self.is_noise(&m.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marginalia_domain::{EntityLabel, EntitySpan};
    use marginalia_nlp::english_pronouns;

    #[test]
    fn test_noise_rules() {
        let stopwords = StopwordList::english();
        let pronouns = english_pronouns();
        let filter = FilterContext::new("J.R.R. Tolkien", &stopwords, &pronouns);

        assert!(filter.is_noise("The"));
        assert!(filter.is_noise("Himself"));
        assert!(filter.is_noise("Tolkien"));
        assert!(filter.is_noise("j.r.r."));
        assert!(filter.is_noise("J.R.R"));
        assert!(filter.is_noise("X"));
        assert!(filter.is_noise(""));
        assert!(!filter.is_noise("Gandalf"));
        assert!(!filter.is_noise("Ents"));
    }

    #[test]
    fn test_author_tokens_only_match_whole_text() {
        let stopwords = StopwordList::english();
        let pronouns = english_pronouns();
        let filter = FilterContext::new("Ursula K. Le Guin", &stopwords, &pronouns);

        assert!(filter.is_author_token("GUIN"));
        assert!(filter.is_author_token("K."));
        assert!(filter.is_author_token("k"));
        assert!(!filter.is_author_token("Le Guin"));
        assert_eq!(filter.author_name_tokens().len(), 5);
    }

    #[test]
    fn test_admit() {
        let stopwords = StopwordList::english();
        let pronouns = english_pronouns();
        let filter = FilterContext::new("Tolkien", &stopwords, &pronouns);

        let mentions = vec![
            RawMention::from_span(&EntitySpan::new("Gandalf", EntityLabel::Person), 0),
            RawMention::from_span(&EntitySpan::new("Tolkien", EntityLabel::Person), 0),
            RawMention::from_span(&EntitySpan::new(" it ", EntityLabel::Org), 1),
        ];
        let admitted = filter.admit(mentions);
        assert_eq!(admitted.len(), 1);
        assert_eq!(admitted[0].text, "Gandalf");
    }
}
