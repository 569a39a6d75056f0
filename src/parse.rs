//! Transcript pattern matching.
//!
//! Chat export apps write one message per line but disagree on everything
//! else, so the parser takes an *ordered* list of patterns, one per known
//! export variant, and applies each in turn over the whole transcript,
//! accumulating matches. Order within a pattern's matches follows the
//! original message order.
//!
//! A well-formed transcript matches exactly one pattern. Matching nothing is
//! not an error — it propagates downstream as an empty table and surfaces to
//! the user as "no data found".
//!
//! # Example
//!
//! ```
//! use chatscope::config::AnalyzerConfig;
//! use chatscope::parse::TranscriptParser;
//!
//! # fn main() -> chatscope::Result<()> {
//! let parser = TranscriptParser::new(&AnalyzerConfig::default().message_patterns)?;
//! let records = parser.apply("2023-01-05, 10:30 a.m. - Alice: Hello there");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].author, "Alice");
//! # Ok(())
//! # }
//! ```

use regex::Regex;

use crate::error::{ChatscopeError, Result};
use crate::record::RawRecord;

/// Applies an ordered list of message patterns to raw transcript text.
///
/// Patterns are compiled once at construction; an invalid pattern string is
/// rejected up front with [`ChatscopeError::Pattern`] rather than failing
/// mid-pipeline. Each pattern is expected to carry three capture groups
/// (timestamp, author, message); a missing group yields an empty field, not
/// an error.
#[derive(Debug)]
pub struct TranscriptParser {
    patterns: Vec<Regex>,
}

impl TranscriptParser {
    /// Compiles the pattern list, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscopeError::Pattern`] for the first pattern that fails
    /// to compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|e| ChatscopeError::pattern(p.as_ref(), e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Extracts raw records from the transcript text.
    ///
    /// Patterns are applied in priority order and all matches accumulate.
    /// A transcript is expected to match exactly one pattern consistently;
    /// if more than one pattern produces matches the accumulated table may
    /// contain duplicates, which is logged as a warning and otherwise
    /// accepted (the caller supplied the pattern list).
    pub fn apply(&self, raw_text: &str) -> Vec<RawRecord> {
        let mut records = Vec::new();
        let mut patterns_hit = 0usize;

        for regex in &self.patterns {
            let before = records.len();
            for caps in regex.captures_iter(raw_text) {
                let timestamp_text = caps.get(1).map_or("", |m| m.as_str());
                let author = caps.get(2).map_or("", |m| m.as_str()).trim();
                let message = caps.get(3).map_or("", |m| m.as_str());
                records.push(RawRecord::new(timestamp_text, author, message));
            }
            if records.len() > before {
                patterns_hit += 1;
            }
        }

        if patterns_hit > 1 {
            tracing::warn!(
                patterns_hit,
                total = records.len(),
                "transcript matched more than one pattern alternative; table may contain duplicates"
            );
        }
        tracing::debug!(records = records.len(), "pattern matching complete");

        records
    }

    /// Number of compiled pattern alternatives.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
