//! Confession lifecycle service
//!
//! Fetches, creates and deletes confessions, triggers the server-side
//! expiry sweep before feed reads, and records views.
//!
//! Failure policy: read failures are logged and degrade to empty result
//! sets so callers never observe a thrown error from reads; only
//! `create` propagates failures.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use ember_core::entities::{Confession, NewConfession, ProfileStats};
use ember_core::DomainError;

use crate::dto::{ConfessionResponse, CreateConfessionRequest, ProfileOverview};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Confession lifecycle service
pub struct ConfessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConfessionService<'a> {
    /// Create a new ConfessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all active confessions, newest first.
    ///
    /// Runs the server-side expiry sweep first (best-effort; a sweep
    /// failure does not abort the read). The result reflects the latest
    /// sweep but may still contain rows whose `burn_after` just passed;
    /// callers must check `burn_after` wherever "active" is rendered.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Vec<Confession> {
        if let Err(e) = self.ctx.confession_repo().sweep_expired().await {
            warn!(error = %e, code = e.code(), "expiry sweep failed, reading anyway");
        }

        match self.ctx.confession_repo().find_active().await {
            Ok(confessions) => confessions,
            Err(e) => {
                warn!(error = %e, code = e.code(), "failed to load confessions");
                Vec::new()
            }
        }
    }

    /// List all confessions owned by a user, burned ones included,
    /// newest first
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Confession> {
        match self.ctx.confession_repo().find_by_user(user_id).await {
            Ok(confessions) => confessions,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "failed to load user confessions");
                Vec::new()
            }
        }
    }

    /// Fetch a single confession by id. Unlike the listings this is not
    /// a degrading read: a missing row is a real error the caller must
    /// handle.
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<Confession> {
        let confession = self.ctx.confession_repo().find_by_id(id).await?;
        confession.ok_or_else(|| DomainError::ConfessionNotFound(id).into())
    }

    /// Create a confession for `user_id`, returning the stored row with
    /// the server-assigned id and timestamps
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateConfessionRequest,
    ) -> ServiceResult<Confession> {
        request.validate()?;

        if request.burn_after <= Utc::now() {
            return Err(DomainError::ExpiryInPast.into());
        }

        let new_confession = NewConfession {
            user_id,
            title: request.title,
            content: request.content,
            kind: request.kind,
            tags: request.tags,
            burn_after: request.burn_after,
        };

        let confession = self.ctx.confession_repo().create(&new_confession).await?;

        info!(
            confession_id = %confession.id,
            user_id = %user_id,
            burn_after = %confession.burn_after,
            "Confession published"
        );

        Ok(confession)
    }

    /// Delete a confession owned by `owner_id`.
    ///
    /// Returns a success flag rather than erroring: ownership is enforced
    /// at the store boundary, so deleting a row that does not exist or
    /// does not belong to the caller simply reports `false`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> bool {
        match self.ctx.confession_repo().delete(id, owner_id).await {
            Ok(true) => {
                info!(confession_id = %id, user_id = %owner_id, "Confession deleted");
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(confession_id = %id, error = %e, "failed to delete confession");
                false
            }
        }
    }

    /// Record one view of a confession. View counting is best-effort:
    /// failures are logged and swallowed.
    #[instrument(skip(self))]
    pub async fn record_view(&self, id: Uuid) {
        if let Err(e) = self.ctx.confession_repo().increment_view_count(id).await {
            warn!(confession_id = %id, error = %e, "failed to record view");
        }
    }

    /// A user's confessions with aggregate statistics for self-review
    #[instrument(skip(self))]
    pub async fn profile_overview(&self, user_id: Uuid) -> ProfileOverview {
        let confessions = self.list_for_user(user_id).await;
        let stats = ProfileStats::from_confessions(&confessions, Utc::now());

        ProfileOverview {
            confessions: confessions.iter().map(ConfessionResponse::from).collect(),
            stats,
        }
    }
}
