//! Error handling utilities for repositories

use ember_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "confession not found" error
pub fn confession_not_found(id: Uuid) -> DomainError {
    DomainError::ConfessionNotFound(id)
}
