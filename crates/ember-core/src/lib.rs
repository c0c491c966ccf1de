//! # ember-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, HTTP client, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Confession, ConfessionKind, NewConfession, ProfileStats, Reaction, ReactionAggregate,
    ReactionSummary,
};
pub use error::DomainError;
pub use traits::{
    AudioClip, ConfessionRepository, NarrationSynthesizer, ReactionRepository, RepoResult,
};
pub use value_objects::{is_palette_emoji, REACTION_PALETTE};
