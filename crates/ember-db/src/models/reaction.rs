//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub confession_id: Uuid,
    pub user_id: Uuid,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}
