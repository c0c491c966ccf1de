//! Confession database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the confessions table
#[derive(Debug, Clone, FromRow)]
pub struct ConfessionModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub burn_after: DateTime<Utc>,
    pub is_burned: bool,
    pub view_count: i64,
}
