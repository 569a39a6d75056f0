//! Group-level and member-level aggregates.
//!
//! Aggregates are pure snapshots recomputed on demand from the raw and
//! featured tables; nothing here is persisted or cached. The raw table
//! contributes the counts that include media placeholders and deletion
//! notices; the featured table contributes member and link counts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::error::{ChatscopeError, Result};
use crate::record::{FeaturedRecord, RawRecord};

/// Summary counts for one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStatistics {
    /// Author of the first raw record.
    ///
    /// This is a convention, not a guarantee: exporters commonly place an
    /// informational header line first, so its sender stands in for the
    /// group context. A transcript that starts with an ordinary message
    /// reports that message's author here.
    pub group_name: String,

    /// Row count of the raw table (media and deletion rows included).
    pub total_messages: usize,

    /// Distinct authors in the featured table (media rows excluded).
    pub total_members: usize,

    /// Raw messages carrying the media placeholder marker.
    pub media_message_count: usize,

    /// Sum of URL counts across the featured table.
    pub link_shared_count: usize,

    /// Raw messages exactly equal to the deletion notice.
    pub deleted_message_count: usize,

    /// Raw messages exactly equal to the self-deletion notice.
    pub self_deleted_count: usize,
}

/// Per-member rollup over the featured table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberActivity {
    /// Display name of the member.
    pub author: String,
    /// Messages posted (featured rows).
    pub message_count: usize,
    /// Sum of word counts.
    pub word_total: usize,
    /// Total emoji characters shared.
    pub emoji_count: usize,
    /// Total links shared.
    pub link_count: usize,
}

impl MemberActivity {
    /// Average words per message, `0.0` for a member with no messages.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_words(&self) -> f64 {
        if self.message_count == 0 {
            return 0.0;
        }
        self.word_total as f64 / self.message_count as f64
    }
}

/// Computes the group summary snapshot.
///
/// # Errors
///
/// Returns [`ChatscopeError::EmptyTranscript`] on an empty raw table: the
/// group name is derived from the first raw row, which does not exist.
pub fn compute_statistics(
    raw: &[RawRecord],
    featured: &[FeaturedRecord],
    config: &AnalyzerConfig,
) -> Result<GroupStatistics> {
    let first = raw
        .first()
        .ok_or_else(|| ChatscopeError::empty_transcript("group statistics over an empty table"))?;

    let members: HashSet<&str> = featured.iter().map(|r| r.author.as_str()).collect();

    let stats = GroupStatistics {
        group_name: first.author.clone(),
        total_messages: raw.len(),
        total_members: members.len(),
        media_message_count: raw
            .iter()
            .filter(|r| r.message.contains(&config.media_marker))
            .count(),
        link_shared_count: featured.iter().map(|r| r.url_count).sum(),
        deleted_message_count: raw
            .iter()
            .filter(|r| r.message == config.deleted_marker)
            .count(),
        self_deleted_count: raw
            .iter()
            .filter(|r| r.message == config.self_deleted_marker)
            .count(),
    };

    tracing::debug!(
        total_messages = stats.total_messages,
        total_members = stats.total_members,
        "statistics computed"
    );
    Ok(stats)
}

/// Rolls the featured table up per member, ordered by descending message
/// count (ties broken by author name for deterministic output).
pub fn member_activity(featured: &[FeaturedRecord]) -> Vec<MemberActivity> {
    let mut rollups: Vec<MemberActivity> = Vec::new();

    for record in featured {
        let idx = match rollups.iter().position(|m| m.author == record.author) {
            Some(i) => i,
            None => {
                rollups.push(MemberActivity {
                    author: record.author.clone(),
                    message_count: 0,
                    word_total: 0,
                    emoji_count: 0,
                    link_count: 0,
                });
                rollups.len() - 1
            }
        };
        let entry = &mut rollups[idx];
        entry.message_count += 1;
        entry.word_total += record.word_count;
        entry.emoji_count += record.emoji_chars.chars().count();
        entry.link_count += record.url_count;
    }

    rollups.sort_by(|a, b| {
        b.message_count
            .cmp(&a.message_count)
            .then_with(|| a.author.cmp(&b.author))
    });
    rollups
}

/// Authors ordered by descending message count.
pub fn sorted_authors(featured: &[FeaturedRecord]) -> Vec<String> {
    member_activity(featured)
        .into_iter()
        .map(|m| m.author)
        .collect()
}
