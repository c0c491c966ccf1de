//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use ember_core::entities::ConfessionKind;

/// Create confession request. The owning user is passed separately to the
/// service; identity is never part of the payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateConfessionRequest {
    #[validate(length(min = 1, max = 120, message = "Title must be 1-120 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: Option<String>,

    #[serde(default)]
    pub kind: ConfessionKind,

    #[validate(length(max = 5, message = "At most 5 tags"))]
    #[serde(default)]
    pub tags: Vec<String>,

    /// Expiry timestamp; the confession burns once this passes
    pub burn_after: DateTime<Utc>,
}
