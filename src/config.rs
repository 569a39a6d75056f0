//! Analyzer configuration.
//!
//! The core has no file, CLI, or network surface: everything that varies by
//! deployment — the ordered message-pattern list, the URL pattern, weekday
//! labels, marker strings, and the corpus ignore list — is handed in as
//! plain data by the embedding layer. [`AnalyzerConfig::default`] ships
//! working values for the known export variants so the crate is usable
//! stand-alone.
//!
//! # Example
//!
//! ```rust
//! use chatscope::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_ignore_patterns(vec!["joined the group".into(), "left the group".into()]);
//! ```

use serde::{Deserialize, Serialize};

/// Message-line patterns for the known export variants, in match priority
/// order. Each pattern has exactly three capture groups: timestamp, author,
/// message.
const DEFAULT_MESSAGE_PATTERNS: [&str; 4] = [
    // 2023-01-05, 10:30 a.m. - Alice: Hello  (Samsung; also "P. M.")
    r"(?m)^(\d{4}-\d{2}-\d{2}, \d{1,2}:\d{2} [APap]\.?\s?[Mm]\.?) - ([^:]+): (.+)$",
    // [15/01/23, 10:30:45 AM] Alice: Hello  (iOS; brackets stay in the capture)
    r"(?m)^(\[\d{1,2}/\d{1,2}/\d{2,4}, \d{1,2}:\d{2}:\d{2} [APap][Mm]\]) ([^:]+): (.+)$",
    // 15/01/2023, 10:30 AM - Alice: Hello  (four-digit year Android)
    r"(?m)^(\d{1,2}/\d{1,2}/\d{4}, \d{1,2}:\d{2} [APap][Mm]) - ([^:]+): (.+)$",
    // 15/01/23, 10:30 am - Alice: Hello  (two-digit year Android)
    r"(?m)^(\d{1,2}/\d{1,2}/\d{2}, \d{1,2}:\d{2} [APap][Mm]) - ([^:]+): (.+)$",
];

/// Messages matching any of these substrings are dropped from the cleaned
/// corpus: system notices and placeholders carry no conversational words.
const DEFAULT_IGNORE_PATTERNS: [&str; 7] = [
    "Messages and calls are end-to-end encrypted",
    "created group",
    "joined the group",
    "left the group",
    "This message was deleted",
    "You deleted this message",
    "omitted",
];

/// Configuration for transcript analysis.
///
/// All fields are plain data and serialize with serde, so the embedding
/// layer can load them from whatever configuration store it owns and pass
/// them through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Ordered message-line patterns, one per known export variant.
    ///
    /// Each pattern must have exactly three capture groups: timestamp,
    /// author, message. Patterns are applied in order and matches
    /// accumulate (see [`crate::parse`]).
    pub message_patterns: Vec<String>,

    /// Pattern counting URL-shaped substrings in a message.
    pub url_pattern: String,

    /// Weekday labels indexed Monday through Sunday.
    ///
    /// Swappable for localization or renaming of weekday labels.
    pub weekday_names: [String; 7],

    /// Substring marking a media placeholder message
    /// (default: `omitted`, matching `<Media omitted>`, `image omitted`, …).
    pub media_marker: String,

    /// Exact message text of a deletion notice seen by other members.
    pub deleted_marker: String,

    /// Exact message text of a self-deletion notice.
    pub self_deleted_marker: String,

    /// Substrings that exclude a message from the cleaned corpus.
    pub ignore_patterns: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            message_patterns: DEFAULT_MESSAGE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
            url_pattern: r"https?://\S+|www\.\S+".to_string(),
            weekday_names: [
                "Monday".to_string(),
                "Tuesday".to_string(),
                "Wednesday".to_string(),
                "Thursday".to_string(),
                "Friday".to_string(),
                "Saturday".to_string(),
                "Sunday".to_string(),
            ],
            media_marker: "omitted".to_string(),
            deleted_marker: "This message was deleted".to_string(),
            self_deleted_marker: "You deleted this message".to_string(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the ordered message-pattern list.
    #[must_use]
    pub fn with_message_patterns(mut self, patterns: Vec<String>) -> Self {
        self.message_patterns = patterns;
        self
    }

    /// Replaces the URL pattern.
    #[must_use]
    pub fn with_url_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.url_pattern = pattern.into();
        self
    }

    /// Replaces the weekday label table (Monday first).
    #[must_use]
    pub fn with_weekday_names(mut self, names: [String; 7]) -> Self {
        self.weekday_names = names;
        self
    }

    /// Replaces the media placeholder marker.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Replaces the corpus ignore list.
    #[must_use]
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }
}
