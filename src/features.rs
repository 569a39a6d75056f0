//! Per-message feature extraction.
//!
//! Takes the normalized table and derives the fields downstream aggregation
//! depends on: the media flag, extracted emoji, URL count, letter and word
//! counts, and the localized weekday label.
//!
//! Media placeholder rows (the export writes `<Media omitted>` instead of
//! content) are excluded from the featured table — there is nothing to
//! extract from a placeholder — but the raw table keeps them so statistics
//! can still count them.
//!
//! Extraction is a pure function: malformed or empty message text yields
//! zero counts and empty fields, never an error.

use std::fmt;
use std::sync::Arc;

use chrono::Datelike;
use regex::Regex;

use crate::config::AnalyzerConfig;
use crate::emoji::{EmojiClassifier, UnicodeRangeClassifier, extract_emoji};
use crate::error::{ChatscopeError, Result};
use crate::record::{FeaturedRecord, NormalizedRecord};

/// Derives [`FeaturedRecord`]s from normalized records.
pub struct FeatureExtractor {
    url_regex: Regex,
    weekday_names: [String; 7],
    media_marker: String,
    classifier: Arc<dyn EmojiClassifier>,
}

impl fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("url_regex", &self.url_regex)
            .field("weekday_names", &self.weekday_names)
            .field("media_marker", &self.media_marker)
            .finish_non_exhaustive()
    }
}

impl FeatureExtractor {
    /// Builds an extractor from configuration, with the default emoji
    /// classifier.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::Pattern`] if the configured URL pattern
    /// does not compile.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let url_regex = Regex::new(&config.url_pattern)
            .map_err(|e| ChatscopeError::pattern(&config.url_pattern, e))?;
        Ok(Self {
            url_regex,
            weekday_names: config.weekday_names.clone(),
            media_marker: config.media_marker.clone(),
            classifier: Arc::new(UnicodeRangeClassifier),
        })
    }

    /// Swaps in a different emoji classification table.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn EmojiClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Returns `true` if the message is a media placeholder.
    pub fn is_media(&self, message: &str) -> bool {
        message.contains(&self.media_marker)
    }

    /// Extracts features for every non-media record, preserving order.
    pub fn extract(&self, records: &[NormalizedRecord]) -> Vec<FeaturedRecord> {
        let featured: Vec<FeaturedRecord> = records
            .iter()
            .filter(|r| !self.is_media(&r.message))
            .map(|r| self.extract_one(r))
            .collect();

        tracing::debug!(
            rows = featured.len(),
            dropped = records.len() - featured.len(),
            "feature extraction complete"
        );
        featured
    }

    fn extract_one(&self, record: &NormalizedRecord) -> FeaturedRecord {
        let weekday_idx = record.timestamp.weekday().num_days_from_monday() as usize;
        FeaturedRecord {
            timestamp: record.timestamp,
            date: record.date,
            time: record.time,
            weekday_name: self.weekday_names[weekday_idx].clone(),
            author: record.author.clone(),
            message: record.message.clone(),
            emoji_chars: extract_emoji(&record.message, self.classifier.as_ref()),
            url_count: self.url_regex.find_iter(&record.message).count(),
            letter_count: record.message.chars().count(),
            word_count: record.message.split_whitespace().count(),
        }
    }
}
