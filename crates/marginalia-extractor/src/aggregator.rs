//! Frequency aggregation and the occurrence threshold

use marginalia_domain::{EntityLabel, MentionLabel, MentionPool, RawMention};
use std::collections::BTreeMap;

/// A person/group surface form with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntity {
    /// Surface text, exactly as harvested
    pub text: String,

    /// Number of mentions across all paragraphs
    pub count: usize,
}

/// Occurrence counts keyed by exact surface text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<String, usize>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence
    pub fn record(&mut self, text: impl Into<String>) {
        *self.counts.entry(text.into()).or_insert(0) += 1;
    }

    /// Occurrences of a surface form (case-sensitive)
    pub fn count(&self, text: &str) -> usize {
        self.counts.get(text).copied().unwrap_or(0)
    }

    /// Add another table's counts into this one
    pub fn merge(&mut self, other: FrequencyTable) {
        for (text, count) in other.counts {
            *self.counts.entry(text).or_insert(0) += count;
        }
    }

    /// Number of distinct surface forms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Candidates seen at least `min_occurrences` times, in text order
    pub fn candidates(&self, min_occurrences: usize) -> Vec<CandidateEntity> {
        self.counts
            .iter()
            .filter(|(_, count)| **count >= min_occurrences)
            .map(|(text, &count)| CandidateEntity {
                text: text.clone(),
                count,
            })
            .collect()
    }
}

/// Decide which pools a mention feeds
///
/// With a group determiner set, a multi-word ORG span that opens with it
/// ("the Fellowship") is kept as a location and also counted as a group
/// candidate. Bucket precedence later removes the location if the group
/// clears the threshold.
pub fn route(mention: &RawMention, group_determiner: Option<&str>) -> &'static [MentionPool] {
    if let (MentionLabel::Entity(EntityLabel::Org), Some(determiner)) =
        (mention.label, group_determiner)
    {
        let mut words = mention.text.split_whitespace();
        let first = words.next();
        if words.next().is_some() && first.is_some_and(|w| w.eq_ignore_ascii_case(determiner)) {
            return &[MentionPool::Location, MentionPool::Aggregated];
        }
    }
    match mention.label.pool() {
        MentionPool::Aggregated => &[MentionPool::Aggregated],
        MentionPool::Location => &[MentionPool::Location],
        MentionPool::Event => &[MentionPool::Event],
    }
}

/// Admitted mentions sorted into their pools
///
/// Location and event mentions are kept once per occurrence; they are never
/// counted or threshold-gated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionPools {
    /// Person/group candidates
    pub aggregated: FrequencyTable,

    /// Location mentions in harvest order
    pub locations: Vec<String>,

    /// Event mentions in harvest order
    pub events: Vec<String>,
}

impl MentionPools {
    /// Create empty pools
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort mentions into pools
    pub fn from_mentions(mentions: Vec<RawMention>, group_determiner: Option<&str>) -> Self {
        let mut pools = Self::new();
        for mention in mentions {
            pools.record(mention, group_determiner);
        }
        pools
    }

    /// Record one mention
    pub fn record(&mut self, mention: RawMention, group_determiner: Option<&str>) {
        for pool in route(&mention, group_determiner) {
            match pool {
                MentionPool::Aggregated => self.aggregated.record(mention.text.as_str()),
                MentionPool::Location => self.locations.push(mention.text.clone()),
                MentionPool::Event => self.events.push(mention.text.clone()),
            }
        }
    }

    /// Append another set of pools
    pub fn merge(&mut self, other: MentionPools) {
        self.aggregated.merge(other.aggregated);
        self.locations.extend(other.locations);
        self.events.extend(other.events);
    }
}
