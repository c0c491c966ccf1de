//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use ember_core::entities::Reaction;
use ember_core::traits::{ReactionRepository, RepoResult};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        confession_id: Uuid,
        user_id: Uuid,
        emoji: &str,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT confession_id, user_id, emoji, created_at
            FROM reactions
            WHERE confession_id = $1 AND user_id = $2 AND emoji = $3
            "#,
        )
        .bind(confession_id)
        .bind(user_id)
        .bind(emoji)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_confession(&self, confession_id: Uuid) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT confession_id, user_id, emoji, created_at
            FROM reactions
            WHERE confession_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(confession_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self, reaction))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        // The unique constraint on (confession_id, user_id, emoji) is the
        // real guard against duplicate inserts from racing toggles.
        sqlx::query(
            r#"
            INSERT INTO reactions (confession_id, user_id, emoji, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (confession_id, user_id, emoji) DO NOTHING
            "#,
        )
        .bind(reaction.confession_id)
        .bind(reaction.user_id)
        .bind(&reaction.emoji)
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, confession_id: Uuid, user_id: Uuid, emoji: &str) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE confession_id = $1 AND user_id = $2 AND emoji = $3
            "#,
        )
        .bind(confession_id)
        .bind(user_id)
        .bind(emoji)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
