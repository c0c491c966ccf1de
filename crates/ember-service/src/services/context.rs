//! Service context - dependency container for services
//!
//! Holds the repository ports needed by the lifecycle and reaction
//! services. Viewer identity is never ambient state here; every
//! operation that needs it takes it as an explicit parameter.

use std::sync::Arc;

use ember_common::{AppConfig, AppError, AppResult};
use ember_core::traits::{ConfessionRepository, ReactionRepository};
use ember_db::{create_pool, PgConfessionRepository, PgPool, PgReactionRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    confession_repo: Arc<dyn ConfessionRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
}

impl ServiceContext {
    /// Create a new service context from repository ports
    pub fn new(
        confession_repo: Arc<dyn ConfessionRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
    ) -> Self {
        Self {
            confession_repo,
            reaction_repo,
        }
    }

    /// Create a context wired to the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgConfessionRepository::new(pool.clone())),
            Arc::new(PgReactionRepository::new(pool)),
        )
    }

    /// Connect the database pool from loaded configuration and wire the
    /// repositories to it
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let pool = create_pool(&config.database)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(Self::from_pool(pool))
    }

    /// Get the confession repository
    pub fn confession_repo(&self) -> &dyn ConfessionRepository {
        self.confession_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}
