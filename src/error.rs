//! Unified error types for chatscope.
//!
//! This module provides a single [`ChatscopeError`] enum that covers all
//! failure cases in the pipeline.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - Feature-level anomalies (a message with no emoji, zero URLs, empty
//!   text) are *not* errors — they produce zero/empty values. Only parsing
//!   and normalization failures abort a pipeline run.

use thiserror::Error;

/// A specialized [`Result`] type for chatscope operations.
///
/// # Example
///
/// ```rust
/// use chatscope::error::Result;
/// use chatscope::record::RawRecord;
///
/// fn my_function() -> Result<Vec<RawRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatscopeError>;

/// The error type for all chatscope operations.
///
/// Each variant carries enough context to surface an actionable message to
/// the person who uploaded the transcript.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatscopeError {
    /// Every timestamp format hypothesis failed on at least one row.
    ///
    /// A transcript uses one export format throughout, so the normalizer
    /// commits to a hypothesis only if it parses the *entire* timestamp
    /// column. This error means no hypothesis managed that, i.e. the export
    /// format is unsupported.
    #[error(
        "unsupported export format: none of the {attempted} timestamp formats matched (first failing value: {sample:?})"
    )]
    UnrecognizedTimestampFormat {
        /// How many format hypotheses were tried.
        attempted: usize,
        /// A timestamp value that failed under the last hypothesis.
        sample: String,
    },

    /// Statistics were requested on a transcript with no parsed rows.
    ///
    /// An empty parse result is itself valid ("no data found"), but
    /// aggregates like the group name are undefined over zero rows.
    #[error("no data found: {context}")]
    EmptyTranscript {
        /// What was being computed when the empty table was hit.
        context: &'static str,
    },

    /// A caller-supplied pattern failed to compile.
    ///
    /// The parser alternatives and the URL pattern are configuration data;
    /// an invalid pattern is rejected when the analyzer is built, never
    /// mid-pipeline.
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        /// The pattern string that failed to compile.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatscopeError {
    /// Creates an unrecognized-timestamp error.
    pub fn unrecognized_timestamp(attempted: usize, sample: impl Into<String>) -> Self {
        ChatscopeError::UnrecognizedTimestampFormat {
            attempted,
            sample: sample.into(),
        }
    }

    /// Creates an empty-transcript error.
    pub fn empty_transcript(context: &'static str) -> Self {
        ChatscopeError::EmptyTranscript { context }
    }

    /// Creates a pattern error from a failed compilation.
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        ChatscopeError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns `true` if this is an unrecognized-timestamp error.
    pub fn is_unrecognized_timestamp(&self) -> bool {
        matches!(self, ChatscopeError::UnrecognizedTimestampFormat { .. })
    }

    /// Returns `true` if this is an empty-transcript error.
    pub fn is_empty_transcript(&self) -> bool {
        matches!(self, ChatscopeError::EmptyTranscript { .. })
    }

    /// Returns `true` if this is a pattern-compilation error.
    pub fn is_pattern(&self) -> bool {
        matches!(self, ChatscopeError::Pattern { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
