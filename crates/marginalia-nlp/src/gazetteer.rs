//! Gazetteer recognizer: dictionary matching over known names
//!
//! Uses Aho-Corasick to find every listed name in a paragraph in one pass.
//! Matches are case-insensitive and must sit on word boundaries, so "Sam"
//! does not fire inside "Samwise" unless "Samwise" is listed too.

use crate::error::NlpError;
use crate::lexicon::StopwordList;
use crate::tokenize::{tag_tokens, word_tokens};
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use marginalia_domain::{EntityLabel, EntitySpan, Recognizer, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// A known name and the label it is reported with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerEntry {
    /// Name as it should be matched
    pub text: String,

    /// Label reported for every match
    pub label: EntityLabel,
}

impl GazetteerEntry {
    /// Create a new entry
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// On-disk gazetteer layout
///
/// ```toml
/// [[entity]]
/// text = "Gandalf"
/// label = "PERSON"
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
struct GazetteerFile {
    #[serde(default, rename = "entity")]
    entities: Vec<EntryRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    text: String,
    label: String,
}

/// Recognizer backed by a fixed list of names
#[derive(Debug, Clone)]
pub struct GazetteerRecognizer {
    automaton: Option<AhoCorasick>,
    entries: Vec<GazetteerEntry>,
    known_words: HashSet<String>,
    stopwords: StopwordList,
}

impl GazetteerRecognizer {
    /// Build a recognizer from entries
    pub fn new(entries: Vec<GazetteerEntry>) -> Result<Self, NlpError> {
        let mut known_words = HashSet::new();
        for entry in &entries {
            if entry.text.trim().is_empty() {
                return Err(NlpError::Gazetteer("Entry text cannot be empty".to_string()));
            }
            known_words.extend(word_tokens(&entry.text).into_iter().map(str::to_lowercase));
        }

        let automaton = if entries.is_empty() {
            None
        } else {
            let patterns: Vec<&str> = entries.iter().map(|e| e.text.trim()).collect();
            let automaton = AhoCorasickBuilder::new()
                .match_kind(MatchKind::LeftmostLongest)
                .ascii_case_insensitive(true)
                .build(&patterns)
                .map_err(|e| NlpError::Gazetteer(format!("Failed to build automaton: {}", e)))?;
            Some(automaton)
        };

        debug!("Built gazetteer with {} entries", entries.len());

        Ok(Self {
            automaton,
            entries,
            known_words,
            stopwords: StopwordList::english(),
        })
    }

    /// A recognizer that knows no names and only tags tokens
    pub fn empty() -> Self {
        Self {
            automaton: None,
            entries: Vec::new(),
            known_words: HashSet::new(),
            stopwords: StopwordList::english(),
        }
    }

    /// Parse a gazetteer from TOML
    pub fn from_toml(toml_str: &str) -> Result<Self, NlpError> {
        let file: GazetteerFile = toml::from_str(toml_str)?;
        let entries = file
            .entities
            .into_iter()
            .map(|record| {
                let label = record.label.parse::<EntityLabel>().map_err(NlpError::Gazetteer)?;
                Ok(GazetteerEntry::new(record.text, label))
            })
            .collect::<Result<Vec<_>, NlpError>>()?;
        Self::new(entries)
    }

    /// Load a gazetteer TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NlpError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Replace the stopword list used by the POS heuristic
    pub fn with_stopwords(mut self, stopwords: StopwordList) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the gazetteer has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn on_word_boundary(text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    }

    /// A capitalized entry only matches capitalized text, so "Hope" the
    /// place never fires on the common noun
    fn keeps_capitalization(entry: &str, matched: &str) -> bool {
        let is_upper = |text: &str| text.chars().next().is_some_and(char::is_uppercase);
        !is_upper(entry.trim()) || is_upper(matched)
    }
}

impl Recognizer for GazetteerRecognizer {
    type Error = NlpError;

    fn recognize(&self, paragraph: &str) -> Result<Vec<EntitySpan>, Self::Error> {
        let automaton = match &self.automaton {
            Some(a) => a,
            None => return Ok(Vec::new()),
        };

        let spans = automaton
            .find_iter(paragraph)
            .filter(|mat| Self::on_word_boundary(paragraph, mat.start(), mat.end()))
            .filter_map(|mat| {
                let entry = self.entries.get(mat.pattern().as_usize())?;
                let matched = &paragraph[mat.start()..mat.end()];
                Self::keeps_capitalization(&entry.text, matched)
                    .then(|| EntitySpan::new(matched, entry.label))
            })
            .collect();

        Ok(spans)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        Ok(tag_tokens(text, &self.stopwords, |word| {
            self.known_words.contains(&word.to_lowercase())
        }))
    }
}
