//! # Chatscope
//!
//! A Rust library for turning exported group-chat transcripts into
//! descriptive analytics: per-member message counts, media/link/emoji
//! statistics, temporal activity fields, and a cleaned word corpus.
//!
//! ## Overview
//!
//! Chat export apps write the same conversation in wildly different text
//! layouts. Chatscope handles the messy part — recognizing the export
//! variant, splitting the flat text blob into structured records, and
//! normalizing inconsistent timestamp formats — and hands the embedding
//! layer finished tables to chart, paginate, or feed to a word-cloud or
//! sentiment renderer.
//!
//! The pipeline is strictly one-directional:
//!
//! ```text
//! raw text → raw records → normalized timestamps → featured table
//!                                      ↘ cleaned corpus / statistics
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscope::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let analyzer = Analyzer::new(AnalyzerConfig::default())?;
//!     let report = analyzer.analyze(
//!         "2023-01-05, 10:30 a.m. - Alice: Hello there\n\
//!          2023-01-05, 10:31 a.m. - Bob: Hi! 😀",
//!     )?;
//!
//!     let stats = report.statistics()?;
//!     assert_eq!(stats.total_messages, 2);
//!     assert_eq!(stats.total_members, 2);
//!
//!     for member in report.member_activity() {
//!         println!("{}: {} messages", member.author, member.message_count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`analyzer`] — [`Analyzer`] pipeline facade and [`ChatReport`] output
//! - [`config`] — [`AnalyzerConfig`](config::AnalyzerConfig): patterns,
//!   markers, weekday labels, ignore list
//! - [`parse`] — ordered pattern matching into raw records
//! - [`normalize`] — timestamp format hypotheses and whole-column commit
//! - [`features`] — per-message feature extraction
//! - [`emoji`] — [`EmojiClassifier`](emoji::EmojiClassifier) trait and the
//!   default Unicode-range table
//! - [`stats`] — group and member aggregates
//! - [`corpus`] — cleaned text for word-cloud/sentiment consumers
//! - [`record`] — the table row types of every stage
//! - [`error`] — [`ChatscopeError`] and [`Result`]
//!
//! ## Error Model
//!
//! Parsing and normalization failures are fatal to a run: an unsupported
//! timestamp format aborts with
//! [`ChatscopeError::UnrecognizedTimestampFormat`] rather than producing
//! guessed timestamps. A transcript matching nothing is *not* an error —
//! it yields empty tables, and statistics over them report
//! [`ChatscopeError::EmptyTranscript`].

pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod emoji;
pub mod error;
pub mod features;
pub mod normalize;
pub mod parse;
pub mod record;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use analyzer::{Analyzer, ChatReport};
pub use error::{ChatscopeError, Result};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscope::prelude::*;
/// ```
pub mod prelude {
    // Pipeline facade
    pub use crate::analyzer::{Analyzer, ChatReport};

    // Error types
    pub use crate::error::{ChatscopeError, Result};

    // Configuration
    pub use crate::config::AnalyzerConfig;

    // Records of every stage
    pub use crate::record::{CleanedRecord, FeaturedRecord, NormalizedRecord, RawRecord};

    // Aggregates
    pub use crate::stats::{GroupStatistics, MemberActivity};

    // Emoji classification
    pub use crate::emoji::{EmojiClassifier, UnicodeRangeClassifier};

    // Stage building blocks for callers composing their own pipeline
    pub use crate::corpus::CorpusCleaner;
    pub use crate::features::FeatureExtractor;
    pub use crate::normalize::{FormatHypothesis, NormalizedTable};
    pub use crate::parse::TranscriptParser;
}
