//! Label module - recognizer labels, POS tags and mention pools

use std::fmt;

/// Semantic category assigned to a span by a recognizer
///
/// Mirrors the OntoNotes labels the pipeline cares about. Any other label a
/// recognition engine produces is dropped before it reaches the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityLabel {
    /// People, including fictional
    Person,

    /// Nationalities, religious or political groups
    Norp,

    /// Companies, agencies, institutions
    Org,

    /// Countries, cities, states
    Gpe,

    /// Non-GPE locations: mountain ranges, bodies of water
    Loc,

    /// Buildings, airports, highways, bridges
    Fac,

    /// Named battles, wars, storms, feasts
    Event,
}

impl EntityLabel {
    /// Every label, in declaration order
    pub const ALL: [EntityLabel; 7] = [
        EntityLabel::Person,
        EntityLabel::Norp,
        EntityLabel::Org,
        EntityLabel::Gpe,
        EntityLabel::Loc,
        EntityLabel::Fac,
        EntityLabel::Event,
    ];

    /// Get the recognizer's label string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Fac => "FAC",
            EntityLabel::Event => "EVENT",
        }
    }

    /// Parse a label from a recognizer label string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PERSON" => Some(EntityLabel::Person),
            "NORP" => Some(EntityLabel::Norp),
            "ORG" => Some(EntityLabel::Org),
            "GPE" => Some(EntityLabel::Gpe),
            "LOC" => Some(EntityLabel::Loc),
            "FAC" => Some(EntityLabel::Fac),
            "EVENT" => Some(EntityLabel::Event),
            _ => None,
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid entity label: {}", s))
    }
}

/// Part-of-speech tag
///
/// Classification only ever asks whether a token is a proper noun; the other
/// variants let recognizers report what they know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Proper noun (PROPN)
    ProperNoun,

    /// Determiner such as "the"
    Determiner,

    /// Personal, possessive or reflexive pronoun
    Pronoun,

    /// Anything else
    Other,
}

impl PosTag {
    /// Get the Universal Dependencies tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::ProperNoun => "PROPN",
            PosTag::Determiner => "DET",
            PosTag::Pronoun => "PRON",
            PosTag::Other => "X",
        }
    }
}

/// Label of a raw mention: a recognizer span or a proper-noun token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionLabel {
    /// Span labelled by the recognizer
    Entity(EntityLabel),

    /// Capitalized proper-noun token the recognizer did not label
    ProperNounToken,
}

/// Downstream pool a mention is recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionPool {
    /// Person/group candidates, counted and threshold-gated
    Aggregated,

    /// Location candidates, recorded per occurrence
    Location,

    /// Event candidates, recorded per occurrence
    Event,
}

impl MentionLabel {
    /// Get the pool this label feeds
    pub fn pool(&self) -> MentionPool {
        match self {
            MentionLabel::ProperNounToken
            | MentionLabel::Entity(EntityLabel::Person)
            | MentionLabel::Entity(EntityLabel::Norp) => MentionPool::Aggregated,
            MentionLabel::Entity(EntityLabel::Org)
            | MentionLabel::Entity(EntityLabel::Gpe)
            | MentionLabel::Entity(EntityLabel::Loc)
            | MentionLabel::Entity(EntityLabel::Fac) => MentionPool::Location,
            MentionLabel::Entity(EntityLabel::Event) => MentionPool::Event,
        }
    }

    /// Get the label name
    pub fn as_str(&self) -> &'static str {
        match self {
            MentionLabel::Entity(label) => label.as_str(),
            MentionLabel::ProperNounToken => "PROPER_NOUN_TOKEN",
        }
    }
}

impl fmt::Display for MentionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
