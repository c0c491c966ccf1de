//! Domain entities - core business objects

mod confession;
mod reaction;

pub use confession::{Confession, ConfessionKind, NewConfession, ProfileStats};
pub use reaction::{Reaction, ReactionAggregate, ReactionSummary};
