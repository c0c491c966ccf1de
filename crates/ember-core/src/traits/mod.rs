//! Ports - traits the infrastructure layer implements

mod narration;
mod repositories;

pub use narration::{AudioClip, NarrationSynthesizer};
pub use repositories::{ConfessionRepository, ReactionRepository, RepoResult};
