//! Canonical forms and per-bucket deduplication

use crate::filter::FilterContext;
use marginalia_domain::ClassifiedResult;
use std::collections::BTreeSet;

/// Canonical display form of an entity
///
/// Lowercases, strips one leading "the ", and capitalizes the first letter:
/// "The SHIRE" and "the shire" both become "Shire".
pub fn canonicalize(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    let stripped = lower.strip_prefix("the ").unwrap_or(&lower).trim_start();

    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Canonicalizes and deduplicates bucket entries
pub struct Normalizer<'a> {
    filter: &'a FilterContext<'a>,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer that re-checks canonical forms against a filter
    pub fn new(filter: &'a FilterContext<'a>) -> Self {
        Self { filter }
    }

    /// Canonicalize entries into a set
    ///
    /// Stripping "the " can expose a one-letter word or an author token, so
    /// canonical forms go through the noise filter again.
    pub fn normalize<I, S>(&self, entries: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        entries
            .into_iter()
            .map(|entry| canonicalize(entry.as_ref()))
            .filter(|canonical| !self.filter.is_noise(canonical))
            .collect()
    }
}

/// Enforce bucket precedence on canonical text
///
/// Characters and groups win over locations, groups win over characters.
pub fn resolve_conflicts(result: &mut ClassifiedResult) {
    let characters = &result.characters;
    let groups = &result.groups;
    result
        .locations
        .retain(|entry| !characters.contains(entry) && !groups.contains(entry));
    result.characters.retain(|entry| !groups.contains(entry));
}
