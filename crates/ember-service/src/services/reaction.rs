//! Reaction aggregator service
//!
//! Folds raw reaction rows into per-emoji tallies with the viewer's own
//! membership flag, and toggles a single reaction row per (confession,
//! user, emoji) triple.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use ember_core::entities::{Reaction, ReactionAggregate};
use ember_core::value_objects::is_palette_emoji;
use ember_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction aggregator service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch all reaction rows for a confession and fold them into the
    /// aggregate view for `viewer_id`.
    ///
    /// O(rows) per call with no caching or incremental maintenance: every
    /// toggle triggers a full refetch-and-refold. Acceptable because
    /// reaction counts per confession are expected to be small. Read
    /// failures degrade to an empty aggregate.
    #[instrument(skip(self))]
    pub async fn aggregate(&self, confession_id: Uuid, viewer_id: Uuid) -> ReactionAggregate {
        match self
            .ctx
            .reaction_repo()
            .find_by_confession(confession_id)
            .await
        {
            Ok(rows) => ReactionAggregate::from_rows(&rows, viewer_id),
            Err(e) => {
                warn!(confession_id = %confession_id, error = %e, "failed to load reactions");
                ReactionAggregate::default()
            }
        }
    }

    /// Toggle the viewer's reaction: delete it if present, insert it
    /// otherwise, then refetch and return the fresh aggregate.
    ///
    /// The check-then-act here is not transactional; the store's
    /// uniqueness constraint on the (confession, user, emoji) triple is
    /// the real safety net against duplicate inserts from racing toggles.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        confession_id: Uuid,
        viewer_id: Uuid,
        emoji: &str,
    ) -> ServiceResult<ReactionAggregate> {
        if !is_palette_emoji(emoji) {
            return Err(DomainError::UnknownEmoji(emoji.to_string()).into());
        }

        let existing = self
            .ctx
            .reaction_repo()
            .find(confession_id, viewer_id, emoji)
            .await?;

        if existing.is_some() {
            self.ctx
                .reaction_repo()
                .delete(confession_id, viewer_id, emoji)
                .await?;
            info!(confession_id = %confession_id, user_id = %viewer_id, emoji = %emoji, "Reaction removed");
        } else {
            let reaction = Reaction::new(confession_id, viewer_id, emoji.to_string());
            self.ctx.reaction_repo().create(&reaction).await?;
            info!(confession_id = %confession_id, user_id = %viewer_id, emoji = %emoji, "Reaction added");
        }

        Ok(self.aggregate(confession_id, viewer_id).await)
    }
}
