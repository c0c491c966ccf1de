//! PostgreSQL implementation of ConfessionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use ember_core::entities::{Confession, NewConfession};
use ember_core::traits::{ConfessionRepository, RepoResult};

use crate::models::ConfessionModel;

use super::error::{confession_not_found, map_db_error};

/// PostgreSQL implementation of ConfessionRepository
#[derive(Clone)]
pub struct PgConfessionRepository {
    pool: PgPool,
}

impl PgConfessionRepository {
    /// Create a new PgConfessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfessionRepository for PgConfessionRepository {
    #[instrument(skip(self))]
    async fn sweep_expired(&self) -> RepoResult<()> {
        // Stored procedure; flips is_burned on every row whose expiry
        // has passed. The flag is never written anywhere else.
        sqlx::query("SELECT mark_expired_confessions()")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Confession>> {
        let results = sqlx::query_as::<_, ConfessionModel>(
            r#"
            SELECT id, user_id, title, content, kind, tags, created_at, burn_after, is_burned, view_count
            FROM confessions
            WHERE is_burned = FALSE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Confession::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Confession>> {
        let results = sqlx::query_as::<_, ConfessionModel>(
            r#"
            SELECT id, user_id, title, content, kind, tags, created_at, burn_after, is_burned, view_count
            FROM confessions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Confession::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Confession>> {
        let result = sqlx::query_as::<_, ConfessionModel>(
            r#"
            SELECT id, user_id, title, content, kind, tags, created_at, burn_after, is_burned, view_count
            FROM confessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Confession::from))
    }

    #[instrument(skip(self, confession))]
    async fn create(&self, confession: &NewConfession) -> RepoResult<Confession> {
        let result = sqlx::query_as::<_, ConfessionModel>(
            r#"
            INSERT INTO confessions (user_id, title, content, kind, tags, burn_after)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, title, content, kind, tags, created_at, burn_after, is_burned, view_count
            "#,
        )
        .bind(confession.user_id)
        .bind(&confession.title)
        .bind(&confession.content)
        .bind(confession.kind.as_str())
        .bind(&confession.tags)
        .bind(confession.burn_after)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Confession::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> RepoResult<bool> {
        // Ownership lives in the WHERE clause: a non-owner's delete
        // matches zero rows and reports false instead of erroring.
        let result = sqlx::query(
            r#"
            DELETE FROM confessions WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn increment_view_count(&self, id: Uuid) -> RepoResult<()> {
        // Single atomic increment; concurrent viewers cannot lose counts.
        let result = sqlx::query(
            r#"
            UPDATE confessions SET view_count = view_count + 1 WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(confession_not_found(id));
        }

        Ok(())
    }
}
