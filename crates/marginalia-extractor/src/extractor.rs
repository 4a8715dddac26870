//! Core EntityExtractor implementation

use crate::aggregator::MentionPools;
use crate::classifier::{remove_character_locations, CategoryClassifier};
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::filter::FilterContext;
use crate::harvester::{harvest, harvest_recognized};
use crate::normalizer::{resolve_conflicts, Normalizer};
use crate::segmenter::ParagraphSegmenter;
use crate::types::{ExtractionReport, ExtractionStats};
use marginalia_domain::{ClassifiedResult, Recognizer};
use marginalia_nlp::{english_pronouns, StopwordList};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Extracts characters, groups, locations and events from text
///
/// The recognizer is owned by the extractor; wrap it in an `Arc` to share
/// one loaded model between extractors or worker threads.
#[derive(Debug, Clone)]
pub struct EntityExtractor<R> {
    recognizer: R,
    config: ExtractorConfig,
    stopwords: StopwordList,
    pronouns: HashSet<String>,
}

impl<R> EntityExtractor<R>
where
    R: Recognizer,
    R::Error: fmt::Display,
{
    /// Create a new EntityExtractor with the English lexicons
    pub fn new(recognizer: R, config: ExtractorConfig) -> Self {
        let mut stopwords = StopwordList::english();
        stopwords.extend(&config.extra_stopwords);
        Self {
            recognizer,
            config,
            stopwords,
            pronouns: english_pronouns(),
        }
    }

    /// Create a new EntityExtractor, rejecting an invalid configuration
    pub fn try_new(
        recognizer: R,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError<R::Error>> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self::new(recognizer, config))
    }

    /// Replace the stopword list (configured extra stopwords still apply)
    pub fn with_stopwords(mut self, mut stopwords: StopwordList) -> Self {
        stopwords.extend(&self.config.extra_stopwords);
        self.stopwords = stopwords;
        self
    }

    /// Replace the pronoun list
    pub fn with_pronouns(mut self, pronouns: HashSet<String>) -> Self {
        self.pronouns = pronouns.into_iter().map(|p| p.to_lowercase()).collect();
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Get the recognizer
    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Extract entities from content written by `author_name`
    ///
    /// Empty content yields empty buckets. Recognizer failures are returned
    /// unchanged.
    pub fn extract(&self, content: &str, author_name: &str) -> Result<ClassifiedResult, R::Error> {
        Ok(self.extract_report(content, author_name)?.result)
    }

    /// Extract entities and report pipeline counters
    pub fn extract_report(
        &self,
        content: &str,
        author_name: &str,
    ) -> Result<ExtractionReport, R::Error> {
        let start = Instant::now();
        let paragraphs = self.segmenter().segment(content);

        info!(
            "Starting entity extraction: {} paragraphs, {} chars",
            paragraphs.len(),
            content.len()
        );

        let filter = self.filter_for(author_name);
        let harvested = harvest(&self.recognizer, &paragraphs, &filter)?;
        let mentions_harvested = harvested.len();
        let admitted = filter.admit(harvested);

        let mut stats = ExtractionStats {
            paragraphs: paragraphs.len(),
            mentions_harvested,
            mentions_admitted: admitted.len(),
            ..ExtractionStats::default()
        };

        let pools = MentionPools::from_mentions(admitted, self.group_determiner());
        let result = self.finish(&filter, pools, &mut stats)?;
        stats.elapsed_ms = start.elapsed().as_millis() as u64;

        Ok(ExtractionReport { result, stats })
    }

    fn segmenter(&self) -> ParagraphSegmenter {
        ParagraphSegmenter::new(self.config.paragraph_delimiter.as_str())
    }

    fn filter_for(&self, author_name: &str) -> FilterContext<'_> {
        FilterContext::new(author_name, &self.stopwords, &self.pronouns)
    }

    fn group_determiner(&self) -> Option<&str> {
        self.config
            .route_determiner_orgs_to_groups
            .then_some(self.config.group_determiner.as_str())
    }

    /// Threshold, classify and normalize pooled mentions
    fn finish(
        &self,
        filter: &FilterContext<'_>,
        pools: MentionPools,
        stats: &mut ExtractionStats,
    ) -> Result<ClassifiedResult, R::Error> {
        let candidates = pools.aggregated.candidates(self.config.min_occurrences);
        stats.candidates_counted = pools.aggregated.len();
        stats.candidates_above_threshold = candidates.len();

        debug!(
            "{} of {} person/group candidates met the threshold of {}",
            candidates.len(),
            pools.aggregated.len(),
            self.config.min_occurrences
        );

        let classifier =
            CategoryClassifier::new(&self.recognizer, filter, &self.config.group_determiner);
        let classified = classifier.classify_all(&candidates)?;
        stats.rejected = classified.rejected;

        let locations = remove_character_locations(pools.locations, &classified.characters);

        let normalizer = Normalizer::new(filter);
        let mut result = ClassifiedResult {
            characters: normalizer.normalize(&classified.characters),
            groups: normalizer.normalize(&classified.groups),
            locations: normalizer.normalize(&locations),
            events: normalizer.normalize(&pools.events),
        };
        resolve_conflicts(&mut result);

        info!(
            "Entity extraction complete: {} characters, {} groups, {} locations, {} events",
            result.characters.len(),
            result.groups.len(),
            result.locations.len(),
            result.events.len()
        );

        Ok(result)
    }
}

impl<R> EntityExtractor<R>
where
    R: Recognizer + Clone + Send + 'static,
    R::Error: fmt::Display + Send + 'static,
{
    /// Extract entities, recognizing paragraphs on blocking worker threads
    ///
    /// At most `max_concurrent_paragraphs` paragraphs are recognized at once.
    /// Per-paragraph pools are merged before classification, so the result
    /// equals `extract` for a deterministic recognizer. Dropping the future
    /// stops further paragraphs from being dispatched.
    pub async fn extract_parallel(
        &self,
        content: &str,
        author_name: &str,
    ) -> Result<ClassifiedResult, ExtractorError<R::Error>> {
        let start = Instant::now();
        let paragraphs = self.segmenter().segment(content);

        info!(
            "Starting parallel entity extraction: {} paragraphs, {} workers",
            paragraphs.len(),
            self.config.max_concurrent_paragraphs
        );

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_paragraphs.max(1)));
        let mut handles = Vec::with_capacity(paragraphs.len());

        for paragraph in &paragraphs {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| ExtractorError::Join(e.to_string()))?;
            let recognizer = self.recognizer.clone();
            let paragraph = paragraph.to_string();

            handles.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                let spans = recognizer.recognize(&paragraph)?;
                let tokens = recognizer.tokenize(&paragraph)?;
                Ok::<_, R::Error>((spans, tokens))
            }));
        }

        let filter = self.filter_for(author_name);
        let group_determiner = self.group_determiner();
        let mut stats = ExtractionStats {
            paragraphs: paragraphs.len(),
            ..ExtractionStats::default()
        };
        let mut pools = MentionPools::new();

        for (index, handle) in handles.into_iter().enumerate() {
            let (spans, tokens) = handle
                .await
                .map_err(|e| ExtractorError::Join(format!("Task join error: {}", e)))?
                .map_err(|e| {
                    warn!("Recognition failed for paragraph {}: {}", index, e);
                    ExtractorError::Recognizer(e)
                })?;

            let harvested = harvest_recognized(&spans, &tokens, index, &filter);
            stats.mentions_harvested += harvested.len();
            let admitted = filter.admit(harvested);
            stats.mentions_admitted += admitted.len();
            pools.merge(MentionPools::from_mentions(admitted, group_determiner));
        }

        let result = self
            .finish(&filter, pools, &mut stats)
            .map_err(ExtractorError::Recognizer)?;

        debug!(
            "Parallel extraction took {} ms",
            start.elapsed().as_millis()
        );

        Ok(result)
    }
}

/// Classify entities with the default configuration
///
/// Convenience wrapper around [`EntityExtractor`]; pass `&recognizer` to keep
/// using a loaded recognizer afterwards.
pub fn classify_entities<R>(
    recognizer: R,
    content: &str,
    author_name: &str,
) -> Result<ClassifiedResult, R::Error>
where
    R: Recognizer,
    R::Error: fmt::Display,
{
    EntityExtractor::new(recognizer, ExtractorConfig::default()).extract(content, author_name)
}
