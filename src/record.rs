//! Record types for each stage of the analysis pipeline.
//!
//! The pipeline is a strict one-way flow and every stage has its own table
//! type:
//!
//! | Stage | Type |
//! |-------|------|
//! | Pattern matching | [`RawRecord`] |
//! | Timestamp normalization | [`NormalizedRecord`] |
//! | Feature extraction | [`FeaturedRecord`] |
//! | Corpus cleaning | [`CleanedRecord`] |
//!
//! Each downstream stage owns and produces its own table; no stage mutates
//! a predecessor's table. All types live only for the duration of one
//! analysis request and serialize cleanly for the presentation layer.
//!
//! # Example
//!
//! ```
//! use chatscope::record::RawRecord;
//!
//! let rec = RawRecord::new("2023-01-05, 10:30 a.m.", "Alice", "Hello there");
//! assert_eq!(rec.author, "Alice");
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A message as extracted by pattern matching, before any normalization.
///
/// `timestamp_text` is the raw capture and may be malformed or carry
/// format-specific decoration (brackets, locale AM/PM punctuation). Raw
/// records are immutable once extracted; the normalizer produces a new
/// table rather than fixing values in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Unparsed timestamp capture, exactly as it appears in the export.
    pub timestamp_text: String,

    /// Display name of the message author.
    pub author: String,

    /// Text content of the message.
    ///
    /// Media messages carry only the export's placeholder string here
    /// (e.g. `<Media omitted>`), never real content.
    pub message: String,
}

impl RawRecord {
    /// Creates a raw record from the three pattern capture groups.
    pub fn new(
        timestamp_text: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_text: timestamp_text.into(),
            author: author.into(),
            message: message.into(),
        }
    }
}

/// A raw record whose timestamp parsed under the committed format hypothesis.
///
/// `date` and `time` are projections of `timestamp`, precomputed because the
/// presentation layer groups by them constantly. Export files carry no time
/// zone, so timestamps stay naive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// The parsed instant.
    pub timestamp: NaiveDateTime,

    /// Calendar-date projection of `timestamp`.
    pub date: NaiveDate,

    /// Time-of-day projection of `timestamp`.
    pub time: NaiveTime,

    /// Display name of the message author.
    pub author: String,

    /// Text content of the message.
    pub message: String,
}

impl NormalizedRecord {
    /// Creates a normalized record, deriving the date and time projections.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            date: timestamp.date(),
            time: timestamp.time(),
            author: author.into(),
            message: message.into(),
        }
    }
}

/// A normalized record enriched with derived per-message fields.
///
/// Media placeholder rows are excluded from the featured table (they carry
/// no real content) but remain in the raw table for statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedRecord {
    /// The parsed instant.
    pub timestamp: NaiveDateTime,

    /// Calendar-date projection of `timestamp`.
    pub date: NaiveDate,

    /// Time-of-day projection of `timestamp`.
    pub time: NaiveTime,

    /// Localized weekday label of `timestamp`, from the configured table.
    pub weekday_name: String,

    /// Display name of the message author.
    pub author: String,

    /// Text content of the message.
    pub message: String,

    /// Every emoji character of `message`, concatenated in original order.
    ///
    /// Empty when the message contains no emoji.
    pub emoji_chars: String,

    /// Number of non-overlapping URL matches in `message`.
    pub url_count: usize,

    /// Unicode code-point count of `message`.
    pub letter_count: usize,

    /// Whitespace-separated token count of `message`.
    pub word_count: usize,
}

/// A sanitized message for word-cloud and sentiment consumption.
///
/// The author is kept so the presentation layer can build per-member word
/// clouds; everything else is stripped down to cleaned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedRecord {
    /// Display name of the message author.
    pub author: String,

    /// Lowercased message text with emoji, URLs, and excess whitespace
    /// removed.
    pub message: String,
}

impl CleanedRecord {
    /// Creates a cleaned record.
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the cleaned text is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}
