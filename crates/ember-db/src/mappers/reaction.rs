//! Reaction entity <-> model mapper

use ember_core::entities::Reaction;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            confession_id: model.confession_id,
            user_id: model.user_id,
            emoji: model.emoji,
            created_at: model.created_at,
        }
    }
}
