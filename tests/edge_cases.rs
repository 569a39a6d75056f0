//! Edge case and boundary-condition tests for the analysis pipeline.

use chatscope::prelude::*;

fn analyzer() -> Analyzer {
    Analyzer::new(AnalyzerConfig::default()).unwrap()
}

// =========================================================================
// Empty and degenerate input
// =========================================================================

#[test]
fn test_empty_transcript() {
    let report = analyzer().analyze("").unwrap();
    assert!(report.is_empty());
    assert!(report.records.is_empty());
    assert!(report.corpus.is_empty());
    assert!(report.member_activity().is_empty());
    assert!(report.sorted_authors().is_empty());
    assert!(report.statistics().unwrap_err().is_empty_transcript());
}

#[test]
fn test_whitespace_only_transcript() {
    let report = analyzer().analyze("   \n\n\t  \n").unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_prose_without_message_lines() {
    let report = analyzer()
        .analyze("Dear diary,\ntoday nothing matched any export format.\n")
        .unwrap();
    assert!(report.is_empty());
    assert!(report.statistics().unwrap_err().is_empty_transcript());
}

// =========================================================================
// Malformed rows
// =========================================================================

#[test]
fn test_interleaved_garbage_lines_are_skipped() {
    let transcript = "\
2023-01-05, 10:30 a.m. - Alice: hello
this line is a continuation the parser does not model
2023-01-05, 10:31 a.m. - Bob: world";

    let report = analyzer().analyze(transcript).unwrap();
    assert_eq!(report.raw.len(), 2);
}

#[test]
fn test_message_with_colons_keeps_full_text() {
    let report = analyzer()
        .analyze("2023-01-05, 10:30 a.m. - Alice: note: remember: milk")
        .unwrap();
    assert_eq!(report.records[0].message, "note: remember: milk");
}

#[test]
fn test_author_with_phone_number_style_name() {
    let report = analyzer()
        .analyze("2023-01-05, 10:30 a.m. - +1 555 0100: hello")
        .unwrap();
    assert_eq!(report.records[0].author, "+1 555 0100");
}

#[test]
fn test_single_character_message() {
    let report = analyzer()
        .analyze("2023-01-05, 10:30 a.m. - Alice: k")
        .unwrap();
    assert_eq!(report.records[0].letter_count, 1);
    assert_eq!(report.records[0].word_count, 1);
}

// =========================================================================
// Timestamp hazards
// =========================================================================

#[test]
fn test_mixed_format_column_fails_whole_run() {
    // one ISO row and one bracketed row: no single hypothesis covers both,
    // and the run must fail rather than guess per row
    let transcript = "\
2023-01-05, 10:30 a.m. - Alice: hello
[15/01/23, 10:30:45 AM] Bob: world";

    let err = analyzer().analyze(transcript).unwrap_err();
    assert!(err.is_unrecognized_timestamp());
}

#[test]
fn test_invalid_calendar_date_fails() {
    let err = analyzer()
        .analyze("2023-02-31, 10:30 a.m. - Alice: hello")
        .unwrap_err();
    assert!(err.is_unrecognized_timestamp());
}

#[test]
fn test_spaced_meridiem_punctuation() {
    let report = analyzer()
        .analyze("2023-01-05, 10:30 P. M. - Alice: late night")
        .unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].time.to_string(), "22:30:00");
}

// =========================================================================
// Feature extraction boundaries
// =========================================================================

#[test]
fn test_emoji_only_message() {
    let report = analyzer()
        .analyze("2023-01-05, 10:30 a.m. - Alice: 😀🚀😀")
        .unwrap();
    let rec = &report.records[0];
    assert_eq!(rec.emoji_chars, "😀🚀😀");
    assert_eq!(rec.letter_count, 3);
    assert_eq!(rec.word_count, 1);

    // the corpus entry cleans down to nothing but stays a record
    assert!(report.corpus[0].is_empty());
}

#[test]
fn test_url_only_message_cleans_to_empty() {
    let report = analyzer()
        .analyze("2023-01-05, 10:30 a.m. - Alice: https://example.com/a?b=c")
        .unwrap();
    assert_eq!(report.records[0].url_count, 1);
    assert!(report.corpus[0].is_empty());
}

#[test]
fn test_media_marker_is_substring_match() {
    let transcript = "\
2023-01-05, 10:30 a.m. - Alice: image omitted
2023-01-05, 10:31 a.m. - Bob: video omitted
2023-01-05, 10:32 a.m. - Carol: I omitted nothing from my story";

    let report = analyzer().analyze(transcript).unwrap();
    // substring matching over-counts Carol's ordinary sentence; this is the
    // documented marker convention, not a bug to paper over
    assert_eq!(report.statistics().unwrap().media_message_count, 3);
    assert!(report.records.is_empty());
}

#[test]
fn test_deletion_markers_counted_but_featured() {
    let transcript = "\
2023-01-05, 10:30 a.m. - Alice: This message was deleted
2023-01-05, 10:31 a.m. - Alice: You deleted this message";

    let report = analyzer().analyze(transcript).unwrap();
    let stats = report.statistics().unwrap();
    assert_eq!(stats.deleted_message_count, 1);
    assert_eq!(stats.self_deleted_count, 1);
    // deletion notices are not media rows; they stay in the featured table
    assert_eq!(report.records.len(), 2);
}

// =========================================================================
// Statistics conventions
// =========================================================================

#[test]
fn test_group_name_is_first_row_author_convention() {
    let transcript = "\
2023-01-05, 10:30 a.m. - Zelda: not actually the group name
2023-01-05, 10:31 a.m. - Alice: hi";
    let stats = analyzer().analyze(transcript).unwrap().statistics().unwrap();
    assert_eq!(stats.group_name, "Zelda");
}

#[test]
fn test_total_members_excludes_media_only_authors() {
    let transcript = "\
2023-01-05, 10:30 a.m. - Alice: hello
2023-01-05, 10:31 a.m. - Lurker: <Media omitted>";
    let stats = analyzer().analyze(transcript).unwrap().statistics().unwrap();
    assert_eq!(stats.total_messages, 2);
    // Lurker only ever posted media, so the featured table never sees them
    assert_eq!(stats.total_members, 1);
}

// =========================================================================
// Configuration boundaries
// =========================================================================

#[test]
fn test_empty_pattern_list_matches_nothing() {
    let analyzer = Analyzer::new(AnalyzerConfig::default().with_message_patterns(vec![])).unwrap();
    let report = analyzer
        .analyze("2023-01-05, 10:30 a.m. - Alice: hello")
        .unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_custom_media_marker() {
    let config = AnalyzerConfig::default().with_media_marker("<attachment>");
    let analyzer = Analyzer::new(config).unwrap();
    let report = analyzer
        .analyze("2023-01-05, 10:30 a.m. - Alice: <attachment>")
        .unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.statistics().unwrap().media_message_count, 1);
}
