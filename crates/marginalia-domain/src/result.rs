//! Result module - the four output buckets

use std::collections::BTreeSet;
use std::fmt;

/// One of the four output buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityBucket {
    /// Individual people and personified beings
    Characters,

    /// Collectives, usually introduced with "the"
    Groups,

    /// Places, organizations and facilities
    Locations,

    /// Named events
    Events,
}

impl EntityBucket {
    /// Every bucket, in display order
    pub const ALL: [EntityBucket; 4] = [
        EntityBucket::Characters,
        EntityBucket::Groups,
        EntityBucket::Locations,
        EntityBucket::Events,
    ];

    /// Get the bucket name as used in response payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityBucket::Characters => "characters",
            EntityBucket::Groups => "groups",
            EntityBucket::Locations => "locations",
            EntityBucket::Events => "events",
        }
    }
}

impl fmt::Display for EntityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical entities extracted from a document prefix
///
/// Invariants maintained by the extractor:
/// - no entry is shorter than two characters
/// - no entry is a stopword, pronoun or author-name token (case-insensitive)
/// - `characters` and `locations` are disjoint
/// - `groups` and `locations` are disjoint
/// - `characters` and `groups` are disjoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedResult {
    /// Characters
    pub characters: BTreeSet<String>,

    /// Groups
    pub groups: BTreeSet<String>,

    /// Locations
    pub locations: BTreeSet<String>,

    /// Events
    pub events: BTreeSet<String>,
}

impl ClassifiedResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Get one bucket
    pub fn bucket(&self, bucket: EntityBucket) -> &BTreeSet<String> {
        match bucket {
            EntityBucket::Characters => &self.characters,
            EntityBucket::Groups => &self.groups,
            EntityBucket::Locations => &self.locations,
            EntityBucket::Events => &self.events,
        }
    }

    /// Get one bucket mutably
    pub fn bucket_mut(&mut self, bucket: EntityBucket) -> &mut BTreeSet<String> {
        match bucket {
            EntityBucket::Characters => &mut self.characters,
            EntityBucket::Groups => &mut self.groups,
            EntityBucket::Locations => &mut self.locations,
            EntityBucket::Events => &mut self.events,
        }
    }

    /// Iterate over all buckets with their names
    pub fn iter_buckets(&self) -> impl Iterator<Item = (EntityBucket, &BTreeSet<String>)> {
        EntityBucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.bucket(bucket)))
    }

    /// Total number of entries across all buckets
    pub fn len(&self) -> usize {
        self.iter_buckets().map(|(_, set)| set.len()).sum()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any bucket contains the given canonical text
    pub fn contains(&self, text: &str) -> bool {
        self.iter_buckets().any(|(_, set)| set.contains(text))
    }
}
