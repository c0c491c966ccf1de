//! Confession entity <-> model mapper

use ember_core::entities::{Confession, ConfessionKind};

use crate::models::ConfessionModel;

/// Convert ConfessionModel to Confession entity
impl From<ConfessionModel> for Confession {
    fn from(model: ConfessionModel) -> Self {
        Confession {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            // The kind column is CHECK-constrained in the migration, so
            // an unparseable value means schema drift; fall back to text.
            kind: model.kind.parse().unwrap_or(ConfessionKind::Text),
            tags: model.tags,
            created_at: model.created_at,
            burn_after: model.burn_after,
            is_burned: model.is_burned,
            view_count: model.view_count,
        }
    }
}
