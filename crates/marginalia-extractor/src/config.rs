//! Configuration for the EntityExtractor

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the EntityExtractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Marker separating paragraphs in the document text
    pub paragraph_delimiter: String,

    /// Minimum occurrences before a person/group candidate is classified
    pub min_occurrences: usize,

    /// Determiner that marks a multi-word candidate as a group
    pub group_determiner: String,

    /// Also count determiner-led ORG spans ("the Fellowship") as group
    /// candidates; they stay locations unless the group clears the threshold
    pub route_determiner_orgs_to_groups: bool,

    /// Words filtered in addition to the English stopword list
    pub extra_stopwords: Vec<String>,

    /// Upper bound on paragraphs recognized at once by the parallel path
    pub max_concurrent_paragraphs: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.paragraph_delimiter.is_empty() {
            return Err("paragraph_delimiter cannot be empty".to_string());
        }
        if self.min_occurrences == 0 {
            return Err("min_occurrences must be greater than 0".to_string());
        }
        let determiner = self.group_determiner.trim();
        if determiner.is_empty() || determiner.contains(char::is_whitespace) {
            return Err("group_determiner must be a single word".to_string());
        }
        if self.max_concurrent_paragraphs == 0 {
            return Err("max_concurrent_paragraphs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration: three occurrences, "the" marks groups
    fn default() -> Self {
        Self {
            paragraph_delimiter: "\n\n".to_string(),
            min_occurrences: 3,
            group_determiner: "the".to_string(),
            route_determiner_orgs_to_groups: true,
            extra_stopwords: Vec::new(),
            max_concurrent_paragraphs: 4,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: every ORG span is a location candidate
    pub fn strict() -> Self {
        Self {
            route_determiner_orgs_to_groups: false,
            ..Self::default()
        }
    }

    /// Sensitive preset: admits candidates seen only twice
    pub fn sensitive() -> Self {
        Self {
            min_occurrences: 2,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }
}
