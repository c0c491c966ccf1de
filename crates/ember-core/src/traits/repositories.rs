//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Confession, NewConfession, Reaction};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Confession Repository
// ============================================================================

#[async_trait]
pub trait ConfessionRepository: Send + Sync {
    /// Run the server-side expiry sweep, flagging every row whose
    /// `burn_after` has passed as burned. The flag is mutated only here,
    /// never by individual client writes.
    async fn sweep_expired(&self) -> RepoResult<()>;

    /// List all unburned confessions, newest first. May still include
    /// rows whose expiry just passed but were not yet swept; callers
    /// must check `burn_after` wherever "active" is rendered.
    async fn find_active(&self) -> RepoResult<Vec<Confession>>;

    /// List all confessions owned by a user (active and burned),
    /// newest first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Confession>>;

    /// Find confession by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Confession>>;

    /// Persist a new confession, returning the stored row with the
    /// server-assigned id and timestamps
    async fn create(&self, confession: &NewConfession) -> RepoResult<Confession>;

    /// Hard-delete a confession. Ownership is enforced at the store
    /// boundary: the row is only removed when it belongs to `owner_id`,
    /// and the return value reports whether anything was deleted.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> RepoResult<bool>;

    /// Atomically increment the view counter by one
    async fn increment_view_count(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find a single reaction by its (confession, user, emoji) identity
    async fn find(
        &self,
        confession_id: Uuid,
        user_id: Uuid,
        emoji: &str,
    ) -> RepoResult<Option<Reaction>>;

    /// List all raw reaction rows for a confession
    async fn find_by_confession(&self, confession_id: Uuid) -> RepoResult<Vec<Reaction>>;

    /// Create a reaction. Must be a no-op when the (confession, user,
    /// emoji) triple already exists; the store's uniqueness constraint,
    /// not client sequencing, guarantees at most one row per triple.
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Delete a reaction by its identity
    async fn delete(&self, confession_id: Uuid, user_id: Uuid, emoji: &str) -> RepoResult<()>;
}
