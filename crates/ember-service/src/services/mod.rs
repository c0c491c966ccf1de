//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod confession;
pub mod context;
pub mod error;
pub mod feed;
pub mod reaction;

// Re-export all services for convenience
pub use confession::ConfessionService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use feed::{FeedPoller, FeedSnapshot};
pub use reaction::ReactionService;
