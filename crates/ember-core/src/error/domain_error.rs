//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Confession not found: {0}")]
    ConfessionNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Emoji not in reaction palette: {0}")]
    UnknownEmoji(String),

    #[error("Expiry must be in the future")]
    ExpiryInPast,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Narration service error: {0}")]
    NarrationError(String),
}

impl DomainError {
    /// Get an error code string for logging and user-facing notifications
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfessionNotFound(_) => "UNKNOWN_CONFESSION",
            Self::UnknownEmoji(_) => "UNKNOWN_EMOJI",
            Self::ExpiryInPast => "EXPIRY_IN_PAST",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::NarrationError(_) => "NARRATION_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfessionNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownEmoji(_) | Self::ExpiryInPast)
    }

    /// Check if this is a transient infrastructure error, recoverable by
    /// the user re-invoking the action
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::NarrationError(_))
    }
}
