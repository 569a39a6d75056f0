//! Corpus cleaning for word-cloud and sentiment consumers.
//!
//! Word clouds and lexicon-based sentiment scoring want plain lowercase
//! words, so the cleaner takes the *raw* table and produces a sanitized
//! copy: system notices and placeholders matching the ignore list are
//! dropped, then each surviving message is lowercased and stripped of
//! emoji, newlines/tabs, runs of spaces, and URL-shaped substrings.
//!
//! Cleaning never touches the featured table; it is a separate derived
//! table with its own ordering guarantee (input order preserved).

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::config::AnalyzerConfig;
use crate::emoji::{EmojiClassifier, UnicodeRangeClassifier, strip_emoji};
use crate::record::{CleanedRecord, RawRecord};

static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());
static HTTP_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+").unwrap());
static WWW_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"www\S+").unwrap());

/// Produces the cleaned corpus from the raw table.
pub struct CorpusCleaner {
    ignore_patterns: Vec<String>,
    classifier: Arc<dyn EmojiClassifier>,
}

impl fmt::Debug for CorpusCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorpusCleaner")
            .field("ignore_patterns", &self.ignore_patterns)
            .finish_non_exhaustive()
    }
}

impl CorpusCleaner {
    /// Builds a cleaner from configuration, with the default emoji
    /// classifier.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            ignore_patterns: config.ignore_patterns.clone(),
            classifier: Arc::new(UnicodeRangeClassifier),
        }
    }

    /// Swaps in a different emoji classification table.
    ///
    /// Use the same classifier as the feature extractor so "emoji" means
    /// one thing across the whole run.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn EmojiClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Cleans the raw table, dropping ignored records and sanitizing the
    /// rest. Relative order of surviving records is preserved.
    pub fn clean(&self, records: &[RawRecord]) -> Vec<CleanedRecord> {
        let cleaned: Vec<CleanedRecord> = records
            .iter()
            .filter(|r| !self.is_ignored(&r.message))
            .map(|r| CleanedRecord::new(r.author.clone(), self.clean_message(&r.message)))
            .collect();

        tracing::debug!(
            rows = cleaned.len(),
            dropped = records.len() - cleaned.len(),
            "corpus cleaning complete"
        );
        cleaned
    }

    fn is_ignored(&self, message: &str) -> bool {
        self.ignore_patterns.iter().any(|p| message.contains(p))
    }

    fn clean_message(&self, message: &str) -> String {
        let text = message.to_lowercase();
        let text = strip_emoji(&text, self.classifier.as_ref());
        let text: String = text.chars().filter(|&c| c != '\n' && c != '\t').collect();
        let text = MULTI_SPACE.replace_all(&text, " ");
        let text = text.trim();
        let text = HTTP_TAIL.replace_all(text, "");
        let text = WWW_TAIL.replace_all(&text, "");
        text.trim().to_string()
    }
}
