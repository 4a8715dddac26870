//! Word segmentation and heuristic part-of-speech tagging

use crate::lexicon::{is_determiner, is_pronoun, StopwordList};
use marginalia_domain::{PosTag, Token};
use unicode_segmentation::UnicodeSegmentation;

/// A word together with whether it opens a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Word<'a> {
    text: &'a str,
    sentence_start: bool,
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn ends_sentence(segment: &str) -> bool {
    segment.contains(['.', '!', '?'])
}

fn words(text: &str) -> Vec<Word<'_>> {
    let mut sentence_start = true;
    let mut out = Vec::new();

    for segment in text.split_word_bounds() {
        if is_word(segment) {
            out.push(Word {
                text: segment,
                sentence_start,
            });
            sentence_start = false;
        } else if ends_sentence(segment) {
            sentence_start = true;
        }
    }

    out
}

/// Split text into words on Unicode word boundaries
///
/// Punctuation and whitespace segments are dropped. Apostrophes inside a
/// word ("Tolkien's") and periods between letters ("J.R.R") stay attached.
pub fn word_tokens(text: &str) -> Vec<&str> {
    text.split_word_bounds().filter(|s| is_word(s)).collect()
}

/// Tokenize text and tag each word with a heuristic part of speech
///
/// `is_known` reports words the caller already knows to be names; they are
/// proper nouns even where capitalization alone is ambiguous.
pub fn tag_tokens<F>(text: &str, stopwords: &StopwordList, is_known: F) -> Vec<Token>
where
    F: Fn(&str) -> bool,
{
    words(text)
        .into_iter()
        .map(|word| {
            let pos = tag_word(word, stopwords, &is_known);
            Token::new(word.text, pos)
        })
        .collect()
}

fn tag_word<F>(word: Word<'_>, stopwords: &StopwordList, is_known: &F) -> PosTag
where
    F: Fn(&str) -> bool,
{
    let capitalized = word.text.chars().next().is_some_and(char::is_uppercase);

    if is_pronoun(word.text) {
        PosTag::Pronoun
    } else if is_determiner(word.text) {
        PosTag::Determiner
    } else if capitalized && (!word.sentence_start || is_known(word.text)) {
        PosTag::ProperNoun
    } else if capitalized && !stopwords.contains(word.text) {
        PosTag::ProperNoun
    } else {
        PosTag::Other
    }
}
