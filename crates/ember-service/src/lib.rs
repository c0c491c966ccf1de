//! # ember-service
//!
//! Application layer containing business logic, services, and DTOs:
//! the confession lifecycle manager, the reaction aggregator, and the
//! feed poller that bounds feed staleness.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use services::{
    ConfessionService, FeedPoller, FeedSnapshot, ReactionService, ServiceContext, ServiceError,
    ServiceResult,
};
