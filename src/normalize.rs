//! Timestamp normalization.
//!
//! Export apps disagree on timestamp layout, so normalization maintains an
//! ordered list of [`FormatHypothesis`] values and tries each against the
//! *entire* timestamp column. The first hypothesis that parses every value
//! wins; a hypothesis that fails on any row is discarded wholesale.
//!
//! Whole-column commit is deliberate: a single export file uses one format
//! throughout, so mixing hypotheses per row would silently mis-read
//! day-first dates as month-first ones. If no hypothesis survives, the run
//! fails with [`ChatscopeError::UnrecognizedTimestampFormat`].
//!
//! Two rewrites happen before parsing:
//! - locale AM/PM punctuation (`a.m.`, `p. m.`, …) becomes `AM`/`PM`
//! - bracket enclosures are stripped for the bracketed-format hypothesis
//!   and everything after it

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

use crate::error::{ChatscopeError, Result};
use crate::record::{NormalizedRecord, RawRecord};

static AM_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)a\.\s?m\.").unwrap());
static PM_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)p\.\s?m\.").unwrap());

/// Candidate timestamp layouts, in trial order.
///
/// The order mirrors how common each export variant is; trying a more
/// specific layout first also keeps two-digit years from being swallowed by
/// the four-digit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatHypothesis {
    /// `2023-01-05, 10:30 AM` (Samsung, after AM/PM rewrite)
    IsoAmPm,
    /// `[15/01/23, 10:30:45 AM]` (iOS, brackets stripped before parsing)
    BracketedDayFirst,
    /// `15/01/2023, 10:30 AM` (four-digit year Android)
    DayFirstLongYear,
    /// `15/01/23, 10:30 AM` (two-digit year Android)
    DayFirstShortYear,
}

impl FormatHypothesis {
    /// Returns the chrono format string for this hypothesis.
    pub fn chrono_format(self) -> &'static str {
        match self {
            FormatHypothesis::IsoAmPm => "%Y-%m-%d, %I:%M %p",
            FormatHypothesis::BracketedDayFirst => "%d/%m/%y, %I:%M:%S %p",
            FormatHypothesis::DayFirstLongYear => "%d/%m/%Y, %I:%M %p",
            FormatHypothesis::DayFirstShortYear => "%d/%m/%y, %I:%M %p",
        }
    }

    /// Whether bracket enclosures are stripped before parsing.
    ///
    /// Stripping starts at the bracketed hypothesis and stays on for the
    /// rest of the list; brackets never appear in the later layouts, so the
    /// strip is a no-op there.
    fn strips_brackets(self) -> bool {
        !matches!(self, FormatHypothesis::IsoAmPm)
    }

    /// All hypotheses in trial order.
    pub fn all() -> &'static [FormatHypothesis] {
        &[
            FormatHypothesis::IsoAmPm,
            FormatHypothesis::BracketedDayFirst,
            FormatHypothesis::DayFirstLongYear,
            FormatHypothesis::DayFirstShortYear,
        ]
    }

    /// Attempts to parse one prepared timestamp value.
    fn parse(self, value: &str) -> Option<NaiveDateTime> {
        let value = if self.strips_brackets() {
            value.trim_start_matches('[').trim_end_matches(']')
        } else {
            value
        };
        let parsed = NaiveDateTime::parse_from_str(value, self.chrono_format()).ok()?;
        // %Y accepts a two-digit year as e.g. year 23 AD; the four-digit
        // hypothesis must not swallow two-digit columns that belong to the
        // short-year hypothesis behind it.
        if self == FormatHypothesis::DayFirstLongYear && parsed.date().year() < 1000 {
            return None;
        }
        Some(parsed)
    }
}

/// Rewrites locale AM/PM punctuation variants to plain `AM`/`PM`.
fn rewrite_meridiem_markers(value: &str) -> String {
    let value = AM_MARKER.replace_all(value, "AM");
    PM_MARKER.replace_all(&value, "PM").into_owned()
}

/// The normalized table plus the hypothesis it was parsed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    /// One record per raw record, in original order.
    pub records: Vec<NormalizedRecord>,
    /// The committed hypothesis; `None` only for an empty input table.
    pub hypothesis: Option<FormatHypothesis>,
}

/// Normalizes the timestamp column of a raw table.
///
/// Tries each [`FormatHypothesis`] in order against the whole column and
/// commits to the first one that parses every value. An empty input yields
/// an empty table, not an error.
///
/// # Errors
///
/// Returns [`ChatscopeError::UnrecognizedTimestampFormat`] when every
/// hypothesis fails on at least one row.
pub fn normalize(records: &[RawRecord]) -> Result<NormalizedTable> {
    if records.is_empty() {
        return Ok(NormalizedTable {
            records: Vec::new(),
            hypothesis: None,
        });
    }

    let prepared: Vec<String> = records
        .iter()
        .map(|r| rewrite_meridiem_markers(&r.timestamp_text))
        .collect();

    let mut failing_sample = String::new();

    'hypotheses: for &hypothesis in FormatHypothesis::all() {
        let mut parsed = Vec::with_capacity(records.len());
        for (record, value) in records.iter().zip(&prepared) {
            match hypothesis.parse(value) {
                Some(timestamp) => {
                    parsed.push(NormalizedRecord::new(
                        timestamp,
                        record.author.clone(),
                        record.message.clone(),
                    ));
                }
                None => {
                    failing_sample = record.timestamp_text.clone();
                    continue 'hypotheses;
                }
            }
        }

        tracing::debug!(?hypothesis, rows = parsed.len(), "timestamp column committed");
        return Ok(NormalizedTable {
            records: parsed,
            hypothesis: Some(hypothesis),
        });
    }

    Err(ChatscopeError::unrecognized_timestamp(
        FormatHypothesis::all().len(),
        failing_sample,
    ))
}
