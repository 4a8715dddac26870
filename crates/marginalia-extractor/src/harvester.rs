//! Mention harvesting from recognizer output

use crate::filter::FilterContext;
use marginalia_domain::{EntitySpan, RawMention, Recognizer, Token};
use std::fmt;
use tracing::{debug, warn};

/// Turn one paragraph's spans and tokens into raw mentions
///
/// Every span becomes a mention. A token becomes a proper-noun mention when
/// it is capitalized, tagged as a proper noun and not noise, which recovers
/// names the recognizer missed.
pub fn harvest_recognized(
    spans: &[EntitySpan],
    tokens: &[Token],
    paragraph_index: usize,
    filter: &FilterContext<'_>,
) -> Vec<RawMention> {
    let from_spans = spans
        .iter()
        .map(|span| RawMention::from_span(span, paragraph_index));

    let from_tokens = tokens
        .iter()
        .filter(|token| {
            token.is_capitalized
                && token.is_proper_noun()
                && !filter.is_noise(&token.text)
        })
        .map(|token| RawMention::from_token(token, paragraph_index));

    from_spans.chain(from_tokens).collect()
}

/// Recognize and harvest a single paragraph
pub fn harvest_paragraph<R: Recognizer>(
    recognizer: &R,
    paragraph: &str,
    paragraph_index: usize,
    filter: &FilterContext<'_>,
) -> Result<Vec<RawMention>, R::Error> {
    let spans = recognizer.recognize(paragraph)?;
    let tokens = recognizer.tokenize(paragraph)?;
    Ok(harvest_recognized(&spans, &tokens, paragraph_index, filter))
}

/// Harvest every paragraph in order
///
/// Stops at the first paragraph the recognizer fails on.
pub fn harvest<R>(
    recognizer: &R,
    paragraphs: &[&str],
    filter: &FilterContext<'_>,
) -> Result<Vec<RawMention>, R::Error>
where
    R: Recognizer,
    R::Error: fmt::Display,
{
    let mut mentions = Vec::new();
    for (index, paragraph) in paragraphs.iter().enumerate() {
        let harvested = harvest_paragraph(recognizer, paragraph, index, filter)
            .inspect_err(|e| warn!("Recognition failed for paragraph {}: {}", index, e))?;
        mentions.extend(harvested);
    }
    debug!(
        "Harvested {} mentions from {} paragraphs",
        mentions.len(),
        paragraphs.len()
    );
    Ok(mentions)
}
