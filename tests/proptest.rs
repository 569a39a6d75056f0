//! Property-based tests for the analysis pipeline.
//!
//! These tests generate random transcripts to exercise the invariants the
//! pipeline promises: whole-column hypothesis commit, count identities,
//! idempotence, and lossless emoji extraction.

use proptest::prelude::*;

use chatscope::emoji::{EmojiClassifier, UnicodeRangeClassifier, extract_emoji, strip_emoji};
use chatscope::normalize::{FormatHypothesis, normalize};
use chatscope::prelude::*;

/// Generate an author name (no colons; colons delimit the message).
fn arb_author() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
        "Иван".to_string(),
        "+1 555 0100".to_string(),
    ])
}

/// Generate message content (single-line; newlines start a new record).
fn arb_message() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "how are you today?".to_string(),
        "see https://example.com".to_string(),
        "🎉🔥 emoji party 😀".to_string(),
        "Привет мир".to_string(),
        "k".to_string(),
        "note: remember: milk".to_string(),
        "<Media omitted>".to_string(),
        "This message was deleted".to_string(),
    ])
}

/// Generate (minute-of-day, author, message) rows, ordered by minute.
fn arb_rows(max_len: usize) -> impl Strategy<Value = Vec<(u32, String, String)>> {
    prop::collection::vec((0u32..1440, arb_author(), arb_message()), 1..max_len).prop_map(
        |mut rows| {
            rows.sort_by_key(|(minute, _, _)| *minute);
            rows
        },
    )
}

fn meridiem(minute_of_day: u32) -> (u32, &'static str) {
    let hour24 = minute_of_day / 60;
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    (hour12, if hour24 < 12 { "a.m." } else { "p.m." })
}

/// Render rows as a Samsung-format transcript.
fn samsung_transcript(rows: &[(u32, String, String)]) -> String {
    rows.iter()
        .map(|(minute, author, message)| {
            let (hour12, marker) = meridiem(*minute);
            format!(
                "2023-01-05, {}:{:02} {} - {}: {}",
                hour12,
                minute % 60,
                marker,
                author,
                message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // NORMALIZER PROPERTIES
    // ============================================

    /// A synthetic column in one format normalizes every row under a single
    /// committed hypothesis, preserving order.
    #[test]
    fn whole_column_commit_and_ordering(rows in arb_rows(30)) {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&samsung_transcript(&rows)).unwrap();

        prop_assert_eq!(report.hypothesis, Some(FormatHypothesis::IsoAmPm));
        prop_assert_eq!(report.raw.len(), rows.len());

        // rows were generated sorted by minute, so instants are non-decreasing
        let raw_records: Vec<RawRecord> = report.raw.clone();
        let normalized = normalize(&raw_records).unwrap();
        for pair in normalized.records.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    // ============================================
    // COUNT IDENTITIES
    // ============================================

    /// total_messages equals the raw row count; total_members equals the
    /// distinct authors of the featured table.
    #[test]
    fn statistics_count_identities(rows in arb_rows(30)) {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&samsung_transcript(&rows)).unwrap();
        let stats = report.statistics().unwrap();

        prop_assert_eq!(stats.total_messages, report.raw.len());

        let mut authors: Vec<&str> = report.records.iter().map(|r| r.author.as_str()).collect();
        authors.sort_unstable();
        authors.dedup();
        prop_assert_eq!(stats.total_members, authors.len());

        let url_sum: usize = report.records.iter().map(|r| r.url_count).sum();
        prop_assert_eq!(stats.link_shared_count, url_sum);
    }

    /// Member rollup message counts sum to the featured row count.
    #[test]
    fn member_counts_sum_to_featured_rows(rows in arb_rows(30)) {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&samsung_transcript(&rows)).unwrap();

        let total: usize = report.member_activity().iter().map(|m| m.message_count).sum();
        prop_assert_eq!(total, report.records.len());
    }

    /// sorted_authors is ordered by non-increasing message count.
    #[test]
    fn sorted_authors_non_increasing(rows in arb_rows(30)) {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&samsung_transcript(&rows)).unwrap();

        let activity = report.member_activity();
        for pair in activity.windows(2) {
            prop_assert!(pair[0].message_count >= pair[1].message_count);
        }
    }

    // ============================================
    // IDEMPOTENCE
    // ============================================

    /// Running the pipeline twice on identical text yields byte-identical
    /// tables and statistics.
    #[test]
    fn pipeline_is_idempotent(rows in arb_rows(20)) {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let transcript = samsung_transcript(&rows);

        let first = analyzer.analyze(&transcript).unwrap();
        let second = analyzer.analyze(&transcript).unwrap();

        prop_assert_eq!(
            serde_json::to_string(&first.records).unwrap(),
            serde_json::to_string(&second.records).unwrap()
        );
        prop_assert_eq!(
            serde_json::to_string(&first.corpus).unwrap(),
            serde_json::to_string(&second.corpus).unwrap()
        );
        prop_assert_eq!(
            serde_json::to_string(&first.statistics().unwrap()).unwrap(),
            serde_json::to_string(&second.statistics().unwrap()).unwrap()
        );
    }

    // ============================================
    // EMOJI PROPERTIES
    // ============================================

    /// Extraction is lossless and order-preserving: the extracted string is
    /// exactly the emoji subsequence of the input, and extraction plus
    /// stripping partitions the text.
    #[test]
    fn emoji_extraction_lossless(text in "\\PC{0,40}") {
        let classifier = UnicodeRangeClassifier;
        let extracted = extract_emoji(&text, &classifier);
        let stripped = strip_emoji(&text, &classifier);

        let expected: String = text.chars().filter(|&c| classifier.is_emoji(c)).collect();
        prop_assert_eq!(&extracted, &expected);

        prop_assert!(extracted.chars().all(|c| classifier.is_emoji(c)));
        prop_assert!(stripped.chars().all(|c| !classifier.is_emoji(c)));
        prop_assert_eq!(
            extracted.chars().count() + stripped.chars().count(),
            text.chars().count()
        );
    }

    // ============================================
    // FEATURE COUNT DEFINITIONS
    // ============================================

    /// letter_count is the code-point count and word_count the whitespace
    /// token count of the message.
    #[test]
    fn feature_counts_match_definitions(rows in arb_rows(20)) {
        let analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
        let report = analyzer.analyze(&samsung_transcript(&rows)).unwrap();

        for record in &report.records {
            prop_assert_eq!(record.letter_count, record.message.chars().count());
            prop_assert_eq!(record.word_count, record.message.split_whitespace().count());
        }
    }
}
