//! Mention module - recognizer output and raw mentions

use crate::label::{EntityLabel, MentionLabel, PosTag};

/// A labelled span returned by a recognizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Surface text as it appears in the paragraph
    pub text: String,

    /// Recognizer label
    pub label: EntityLabel,
}

impl EntitySpan {
    /// Create a new span
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// A single token with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text
    pub text: String,

    /// Part-of-speech tag
    pub pos: PosTag,

    /// Whether the first character is uppercase
    pub is_capitalized: bool,
}

impl Token {
    /// Create a token, deriving capitalization from the text
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        let text = text.into();
        let is_capitalized = text.chars().next().is_some_and(char::is_uppercase);
        Self {
            text,
            pos,
            is_capitalized,
        }
    }

    /// Whether the token is tagged as a proper noun
    pub fn is_proper_noun(&self) -> bool {
        self.pos == PosTag::ProperNoun
    }
}

/// A candidate mention harvested from one paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMention {
    /// Surface text
    pub text: String,

    /// Where the mention came from
    pub label: MentionLabel,

    /// Index of the paragraph it was harvested from
    pub paragraph_index: usize,
}

impl RawMention {
    /// Create a mention from a recognizer span
    pub fn from_span(span: &EntitySpan, paragraph_index: usize) -> Self {
        Self {
            text: span.text.trim().to_string(),
            label: MentionLabel::Entity(span.label),
            paragraph_index,
        }
    }

    /// Create a mention from a proper-noun token
    pub fn from_token(token: &Token, paragraph_index: usize) -> Self {
        Self {
            text: token.text.clone(),
            label: MentionLabel::ProperNounToken,
            paragraph_index,
        }
    }
}
