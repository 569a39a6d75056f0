//! The analysis pipeline facade.
//!
//! [`Analyzer`] wires the stages together and runs them in their one fixed
//! order: raw text → pattern matching → timestamp normalization → feature
//! extraction → corpus cleaning. One uploaded transcript is one call to
//! [`Analyzer::analyze`]; the pipeline holds no state between calls, so the
//! embedding layer can re-run it on every interaction and get identical
//! output for identical input.
//!
//! The result is a [`ChatReport`] holding the raw, featured, and cleaned
//! tables. Aggregates are computed on demand from the report, never stored.
//!
//! # Example
//!
//! ```
//! use chatscope::analyzer::Analyzer;
//! use chatscope::config::AnalyzerConfig;
//!
//! # fn main() -> chatscope::Result<()> {
//! let analyzer = Analyzer::new(AnalyzerConfig::default())?;
//! let report = analyzer.analyze("2023-01-05, 10:30 a.m. - Alice: Hello there")?;
//!
//! assert_eq!(report.records.len(), 1);
//! let stats = report.statistics()?;
//! assert_eq!(stats.total_messages, 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::corpus::CorpusCleaner;
use crate::emoji::EmojiClassifier;
use crate::error::Result;
use crate::features::FeatureExtractor;
use crate::normalize::{self, FormatHypothesis};
use crate::parse::TranscriptParser;
use crate::record::{CleanedRecord, FeaturedRecord, RawRecord};
use crate::stats::{self, GroupStatistics, MemberActivity};

/// Runs the full analysis pipeline over one transcript at a time.
///
/// All patterns are compiled once at construction; `analyze` itself cannot
/// fail on configuration.
#[derive(Debug)]
pub struct Analyzer {
    parser: TranscriptParser,
    extractor: FeatureExtractor,
    cleaner: CorpusCleaner,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Builds an analyzer, compiling every configured pattern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChatscopeError::Pattern`] if a message pattern or
    /// the URL pattern fails to compile.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            parser: TranscriptParser::new(&config.message_patterns)?,
            extractor: FeatureExtractor::from_config(&config)?,
            cleaner: CorpusCleaner::from_config(&config),
            config,
        })
    }

    /// Swaps in a different emoji classification table.
    ///
    /// The same classifier feeds both feature extraction and corpus
    /// cleaning, so "emoji" means one thing across the whole run.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn EmojiClassifier>) -> Self {
        self.extractor = self.extractor.with_classifier(Arc::clone(&classifier));
        self.cleaner = self.cleaner.with_classifier(classifier);
        self
    }

    /// Returns the configuration this analyzer was built from.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes one transcript.
    ///
    /// A transcript matching no pattern yields a report with empty tables
    /// ("no data"), not an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChatscopeError::UnrecognizedTimestampFormat`] when
    /// messages were matched but no timestamp format hypothesis parses the
    /// whole column. No partial results are produced in that case.
    pub fn analyze(&self, raw_text: &str) -> Result<ChatReport> {
        tracing::debug!(bytes = raw_text.len(), "starting transcript analysis");

        let raw = self.parser.apply(raw_text);
        let normalized = normalize::normalize(&raw)?;
        let records = self.extractor.extract(&normalized.records);
        let corpus = self.cleaner.clean(&raw);

        Ok(ChatReport {
            raw,
            records,
            corpus,
            hypothesis: normalized.hypothesis,
            config: self.config.clone(),
        })
    }
}

/// The result of one pipeline run.
///
/// Holds the three tables the presentation layer consumes. Everything lives
/// only for the duration of one analysis request.
#[derive(Debug, Clone)]
pub struct ChatReport {
    /// All pattern-matched records, media and system rows included.
    pub raw: Vec<RawRecord>,

    /// The featured table (media placeholder rows excluded).
    pub records: Vec<FeaturedRecord>,

    /// The cleaned corpus for word-cloud and sentiment consumers.
    pub corpus: Vec<CleanedRecord>,

    /// The committed timestamp format; `None` when nothing matched.
    pub hypothesis: Option<FormatHypothesis>,

    config: AnalyzerConfig,
}

impl ChatReport {
    /// Returns `true` if no pattern matched anything ("no data found").
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Computes the group summary snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChatscopeError::EmptyTranscript`] if the raw table
    /// is empty.
    pub fn statistics(&self) -> Result<GroupStatistics> {
        stats::compute_statistics(&self.raw, &self.records, &self.config)
    }

    /// Per-member rollups, ordered by descending message count.
    pub fn member_activity(&self) -> Vec<MemberActivity> {
        stats::member_activity(&self.records)
    }

    /// Authors ordered by descending message count.
    pub fn sorted_authors(&self) -> Vec<String> {
        stats::sorted_authors(&self.records)
    }

    /// The cleaned messages of one author, for per-member word clouds.
    pub fn corpus_for(&self, author: &str) -> Vec<&CleanedRecord> {
        self.corpus.iter().filter(|c| c.author == author).collect()
    }
}
