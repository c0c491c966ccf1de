//! Reaction entity - an emoji reaction on a confession

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Reaction entity. Identity is the (confession, user, emoji) triple;
/// there is no independent payload and rows are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub confession_id: Uuid,
    pub user_id: Uuid,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(confession_id: Uuid, user_id: Uuid, emoji: String) -> Self {
        Self {
            confession_id,
            user_id,
            emoji,
            created_at: Utc::now(),
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }
}

/// Per-emoji tally plus the viewing user's own membership flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionSummary {
    pub emoji: String,
    pub count: i64,
    pub viewer_reacted: bool,
}

/// Derived per-confession reaction view, recomputed fully from raw rows
/// on every fetch. Never persisted and never incrementally maintained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionAggregate {
    by_emoji: BTreeMap<String, ReactionSummary>,
}

impl ReactionAggregate {
    /// Fold raw reaction rows into the aggregate view for `viewer_id`
    pub fn from_rows(rows: &[Reaction], viewer_id: Uuid) -> Self {
        let mut by_emoji: BTreeMap<String, ReactionSummary> = BTreeMap::new();
        for row in rows {
            let entry = by_emoji
                .entry(row.emoji.clone())
                .or_insert_with(|| ReactionSummary {
                    emoji: row.emoji.clone(),
                    count: 0,
                    viewer_reacted: false,
                });
            entry.count += 1;
            if row.user_id == viewer_id {
                entry.viewer_reacted = true;
            }
        }
        Self { by_emoji }
    }

    /// Look up the summary for one emoji, if anyone has reacted with it
    pub fn get(&self, emoji: &str) -> Option<&ReactionSummary> {
        self.by_emoji.get(emoji)
    }

    /// Tally for one emoji (zero when absent)
    pub fn count(&self, emoji: &str) -> i64 {
        self.by_emoji.get(emoji).map_or(0, |s| s.count)
    }

    /// Whether the viewer this aggregate was computed for has reacted
    /// with the given emoji
    pub fn viewer_reacted(&self, emoji: &str) -> bool {
        self.by_emoji.get(emoji).is_some_and(|s| s.viewer_reacted)
    }

    /// Iterate over the present emoji summaries
    pub fn iter(&self) -> impl Iterator<Item = &ReactionSummary> {
        self.by_emoji.values()
    }

    /// True when no reactions exist for the confession
    pub fn is_empty(&self) -> bool {
        self.by_emoji.is_empty()
    }
}
