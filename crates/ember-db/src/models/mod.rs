//! Database models with SQLx `FromRow` derives

mod confession;
mod reaction;

pub use confession::ConfessionModel;
pub use reaction::ReactionModel;
