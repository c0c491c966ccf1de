//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use ember_core::entities::{Confession, ConfessionKind, ProfileStats, ReactionSummary};

/// Confession response with the activity flag resolved against the clock
/// at serialization time
#[derive(Debug, Clone, Serialize)]
pub struct ConfessionResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: ConfessionKind,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub burn_after: DateTime<Utc>,
    pub is_burned: bool,
    pub view_count: i64,
    /// Resolved from both the sweep flag and the expiry timestamp
    pub active: bool,
}

impl From<&Confession> for ConfessionResponse {
    fn from(confession: &Confession) -> Self {
        Self {
            id: confession.id,
            user_id: confession.user_id,
            title: confession.title.clone(),
            content: confession.content.clone(),
            kind: confession.kind,
            tags: confession.tags.clone(),
            created_at: confession.created_at,
            burn_after: confession.burn_after,
            is_burned: confession.is_burned,
            view_count: confession.view_count,
            active: confession.is_active(),
        }
    }
}

/// Per-emoji reaction summary for display
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub emoji: String,
    pub count: i64,
    pub me: bool,
}

impl From<&ReactionSummary> for ReactionResponse {
    fn from(summary: &ReactionSummary) -> Self {
        Self {
            emoji: summary.emoji.clone(),
            count: summary.count,
            me: summary.viewer_reacted,
        }
    }
}

/// A user's confessions (active and burned) with aggregate statistics
#[derive(Debug, Clone, Serialize)]
pub struct ProfileOverview {
    pub confessions: Vec<ConfessionResponse>,
    pub stats: ProfileStats,
}
