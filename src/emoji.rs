//! Emoji classification.
//!
//! Both feature extraction (collecting a message's emoji) and corpus
//! cleaning (stripping them) need the same membership question: *is this
//! character an emoji?* The answer changes with Unicode versions, so the
//! check is behind the [`EmojiClassifier`] trait and injected into both
//! stages; swapping or versioning the table never touches extraction logic.
//!
//! [`UnicodeRangeClassifier`] is the default implementation, a fixed table
//! of Unicode block ranges covering emoticons, pictographs, transport
//! symbols, flags (regional indicators), dingbats, and the joiner/variation
//! characters that glue sequences together.

/// Classifies a single character as emoji or not.
///
/// Implementations must be pure: the same character always gets the same
/// answer within one analysis run.
pub trait EmojiClassifier: Send + Sync {
    /// Returns `true` if `ch` is classified as an emoji character.
    fn is_emoji(&self, ch: char) -> bool;
}

/// Inclusive code-point ranges treated as emoji, sorted by start.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x200D, 0x200D),   // zero width joiner
    (0x2600, 0x26FF),   // miscellaneous symbols
    (0x2700, 0x27BF),   // dingbats
    (0x2B00, 0x2BFF),   // arrows and symbols (stars, circles)
    (0xFE0F, 0xFE0F),   // variation selector-16
    (0x1F1E6, 0x1F1FF), // regional indicators (flags)
    (0x1F300, 0x1F5FF), // symbols and pictographs
    (0x1F600, 0x1F64F), // emoticons
    (0x1F680, 0x1F6FF), // transport and map symbols
    (0x1F900, 0x1F9FF), // supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // symbols and pictographs extended-A
];

/// The default range-table classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeRangeClassifier;

impl EmojiClassifier for UnicodeRangeClassifier {
    fn is_emoji(&self, ch: char) -> bool {
        let cp = u32::from(ch);
        EMOJI_RANGES
            .binary_search_by(|&(start, end)| {
                if cp < start {
                    std::cmp::Ordering::Greater
                } else if cp > end {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }
}

/// Concatenates every emoji character of `text`, in original order.
pub fn extract_emoji(text: &str, classifier: &dyn EmojiClassifier) -> String {
    text.chars().filter(|&c| classifier.is_emoji(c)).collect()
}

/// Removes every emoji character from `text`, preserving everything else.
pub fn strip_emoji(text: &str, classifier: &dyn EmojiClassifier) -> String {
    text.chars().filter(|&c| !classifier.is_emoji(c)).collect()
}
