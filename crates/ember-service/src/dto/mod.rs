//! Data transfer objects
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::CreateConfessionRequest;
pub use responses::{ConfessionResponse, ProfileOverview, ReactionResponse};
