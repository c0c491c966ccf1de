//! Confession entity - an anonymous post that burns after its expiry passes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content type of a confession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfessionKind {
    #[default]
    Text,
    Audio,
    Video,
}

impl ConfessionKind {
    /// String tag as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl std::str::FromStr for ConfessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "audio" => Ok(Self::Audio),
            "video" => Ok(Self::Video),
            other => Err(format!("unknown confession kind: {other}")),
        }
    }
}

/// Confession entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confession {
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
}

impl Confession {
    /// A confession is active iff the sweep has not flagged it AND its
    /// expiry has not passed. Both checks are needed: the flag is set
    /// asynchronously by the server-side sweep and may lag the true
    /// expiry instant.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_burned && now < self.burn_after
    }

    /// Check activity against the current wall clock
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// A confession counts as burned once either the flag is set or the
    /// expiry has passed, even if the sweep has not caught up yet.
    pub fn is_burned_at(&self, now: DateTime<Utc>) -> bool {
        self.is_burned || now >= self.burn_after
    }
}

/// Insert payload for a new confession; id, timestamps and counters are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewConfession {
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: ConfessionKind,
    pub tags: Vec<String>,
    pub burn_after: DateTime<Utc>,
}

/// Aggregate statistics over a user's confessions (active and burned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProfileStats {
    pub total: usize,
    pub active: usize,
    pub burned: usize,
    pub total_views: i64,
}

impl ProfileStats {
    /// Fold a user's confessions into aggregate stats
    pub fn from_confessions(confessions: &[Confession], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total: confessions.len(),
            ..Self::default()
        };
        for confession in confessions {
            if confession.is_burned_at(now) {
                stats.burned += 1;
            } else {
                stats.active += 1;
            }
            stats.total_views += confession.view_count;
        }
        stats
    }
}
