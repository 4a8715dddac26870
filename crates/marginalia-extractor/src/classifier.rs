//! Category classification of admitted candidates

use crate::aggregator::CandidateEntity;
use crate::filter::FilterContext;
use crate::normalizer::canonicalize;
use marginalia_domain::Recognizer;
use std::fmt;
use tracing::debug;

/// Why a candidate was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Re-tokenizing produced no tokens
    Empty,

    /// Whole text is a token of the author's name
    AuthorName,

    /// A token is a stopword
    Stopword,

    /// Single token not tagged as a proper noun
    NotProperNoun,

    /// Leading token is a pronoun
    Pronoun,

    /// Neither a group nor a character
    Unclassified,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectReason::Empty => "empty",
            RejectReason::AuthorName => "author name",
            RejectReason::Stopword => "stopword",
            RejectReason::NotProperNoun => "not a proper noun",
            RejectReason::Pronoun => "pronoun",
            RejectReason::Unclassified => "unclassified",
        };
        f.write_str(reason)
    }
}

/// Outcome of classifying one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// An individual
    Character,

    /// A collective introduced by the group determiner
    Group,

    /// Dropped
    Rejected(RejectReason),
}

/// Candidates sorted into characters and groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedCandidates {
    /// Raw surface text of characters
    pub characters: Vec<String>,

    /// Raw surface text of groups
    pub groups: Vec<String>,

    /// Number of dropped candidates
    pub rejected: usize,
}

/// Classifies candidates using the recognizer's tokenizer
pub struct CategoryClassifier<'a, R> {
    recognizer: &'a R,
    filter: &'a FilterContext<'a>,
    group_determiner: &'a str,
}

impl<'a, R: Recognizer> CategoryClassifier<'a, R> {
    /// Create a classifier
    pub fn new(
        recognizer: &'a R,
        filter: &'a FilterContext<'a>,
        group_determiner: &'a str,
    ) -> Self {
        Self {
            recognizer,
            filter,
            group_determiner,
        }
    }

    fn is_group_determiner(&self, word: &str) -> bool {
        word.to_lowercase() == self.group_determiner.to_lowercase()
    }

    /// Classify one candidate
    ///
    /// Rules apply in order; the group rule wins over the character rule for
    /// multi-word candidates.
    pub fn classify(&self, candidate: &CandidateEntity) -> Result<Classification, R::Error> {
        let tokens = self.recognizer.tokenize(&candidate.text)?;
        let Some(first) = tokens.first() else {
            return Ok(Classification::Rejected(RejectReason::Empty));
        };
        let multi_word = tokens.len() > 1;
        let leads_with_determiner = multi_word && self.is_group_determiner(&first.text);

        if self.filter.is_author_token(&candidate.text) {
            return Ok(Classification::Rejected(RejectReason::AuthorName));
        }

        // The group determiner is itself a stopword; it only counts as one
        // when it stands alone.
        let skip = usize::from(leads_with_determiner);
        if tokens
            .iter()
            .skip(skip)
            .any(|token| self.filter.is_stopword(&token.text))
        {
            return Ok(Classification::Rejected(RejectReason::Stopword));
        }

        if !multi_word && !first.is_proper_noun() {
            return Ok(Classification::Rejected(RejectReason::NotProperNoun));
        }

        if self.filter.is_pronoun(&first.text) {
            return Ok(Classification::Rejected(RejectReason::Pronoun));
        }

        if leads_with_determiner {
            Ok(Classification::Group)
        } else if tokens.iter().any(|token| token.is_proper_noun()) {
            Ok(Classification::Character)
        } else {
            Ok(Classification::Rejected(RejectReason::Unclassified))
        }
    }

    /// Classify every candidate, in order
    pub fn classify_all(
        &self,
        candidates: &[CandidateEntity],
    ) -> Result<ClassifiedCandidates, R::Error> {
        let mut classified = ClassifiedCandidates::default();

        for candidate in candidates {
            match self.classify(candidate)? {
                Classification::Character => classified.characters.push(candidate.text.clone()),
                Classification::Group => classified.groups.push(candidate.text.clone()),
                Classification::Rejected(reason) => {
                    debug!(
                        "Rejected candidate '{}' ({} occurrences): {}",
                        candidate.text, candidate.count, reason
                    );
                    classified.rejected += 1;
                }
            }
        }

        Ok(classified)
    }
}

/// Drop locations that were classified as characters
///
/// A location collides with a character when the raw text or the canonical
/// form matches.
pub fn remove_character_locations(locations: Vec<String>, characters: &[String]) -> Vec<String> {
    let canonical: Vec<String> = characters.iter().map(|c| canonicalize(c)).collect();
    locations
        .into_iter()
        .filter(|location| {
            !characters.contains(location) && !canonical.contains(&canonicalize(location))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marginalia_domain::{PosTag, Token};
    use marginalia_nlp::{english_pronouns, MockRecognizer, StopwordList};

    fn candidate(text: &str) -> CandidateEntity {
        CandidateEntity {
            text: text.to_string(),
            count: 3,
        }
    }

    fn classify_with(recognizer: &MockRecognizer, text: &str) -> Classification {
        let stopwords = StopwordList::english();
        let pronouns = english_pronouns();
        let filter = FilterContext::new("J.R.R. Tolkien", &stopwords, &pronouns);
        let classifier = CategoryClassifier::new(recognizer, &filter, "the");
        classifier.classify(&candidate(text)).unwrap()
    }

    fn classify(text: &str) -> Classification {
        classify_with(&MockRecognizer::new(), text)
    }

    #[test]
    fn test_single_proper_noun_is_character() {
        assert_eq!(classify("Gandalf"), Classification::Character);
    }

    #[test]
    fn test_determiner_led_candidate_is_group() {
        assert_eq!(classify("the Fellowship"), Classification::Group);
        assert_eq!(classify("The Shire"), Classification::Group);
        assert_eq!(classify("the shire"), Classification::Group);
    }

    #[test]
    fn test_group_rule_precedes_character_rule() {
        // Every token of "The Grey Company" after the determiner is a proper
        // noun, so it would also qualify as a character.
        assert_eq!(classify("The Grey Company"), Classification::Group);
    }

    #[test]
    fn test_multi_word_name_is_character() {
        assert_eq!(classify("Bilbo Baggins"), Classification::Character);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(classify("Tolkien"), Classification::Rejected(RejectReason::AuthorName));
        assert_eq!(classify("Sam and Frodo"), Classification::Rejected(RejectReason::Stopword));
        assert_eq!(classify("The"), Classification::Rejected(RejectReason::Stopword));
        assert_eq!(classify("hobbits"), Classification::Rejected(RejectReason::NotProperNoun));
        assert_eq!(classify("old wizard"), Classification::Rejected(RejectReason::Unclassified));
        assert_eq!(classify("..."), Classification::Rejected(RejectReason::Empty));
    }

    #[test]
    fn test_pronoun_rejected_when_not_a_stopword() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_tokens(
            "Thou Gollum",
            vec![
                Token::new("Thou", PosTag::Pronoun),
                Token::new("Gollum", PosTag::ProperNoun),
            ],
        );
        let stopwords = StopwordList::english();
        let mut pronouns = english_pronouns();
        pronouns.insert("thou".to_string());
        let filter = FilterContext::new("", &stopwords, &pronouns);
        let classifier = CategoryClassifier::new(&recognizer, &filter, "the");

        assert_eq!(
            classifier.classify(&candidate("Thou Gollum")).unwrap(),
            Classification::Rejected(RejectReason::Pronoun)
        );
    }

    #[test]
    fn test_scripted_pos_is_respected() {
        let mut recognizer = MockRecognizer::new();
        recognizer.add_tokens("Strider", vec![Token::new("Strider", PosTag::Other)]);
        assert_eq!(
            classify_with(&recognizer, "Strider"),
            Classification::Rejected(RejectReason::NotProperNoun)
        );
    }

    #[test]
    fn test_classify_all() {
        let recognizer = MockRecognizer::new();
        let stopwords = StopwordList::english();
        let pronouns = english_pronouns();
        let filter = FilterContext::new("", &stopwords, &pronouns);
        let classifier = CategoryClassifier::new(&recognizer, &filter, "the");

        let classified = classifier
            .classify_all(&[candidate("Aragorn"), candidate("the Rangers"), candidate("hobbits")])
            .unwrap();
        assert_eq!(classified.characters, vec!["Aragorn".to_string()]);
        assert_eq!(classified.groups, vec!["the Rangers".to_string()]);
        assert_eq!(classified.rejected, 1);
    }

    #[test]
    fn test_remove_character_locations() {
        let characters = vec!["Bree".to_string(), "the Withywindle".to_string()];
        let locations = vec![
            "Bree".to_string(),
            "Withywindle".to_string(),
            "Mordor".to_string(),
        ];
        assert_eq!(
            remove_character_locations(locations, &characters),
            vec!["Mordor".to_string()]
        );
    }
}
