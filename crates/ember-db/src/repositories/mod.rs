//! PostgreSQL repository implementations

mod confession;
mod error;
mod reaction;

pub use confession::PgConfessionRepository;
pub use reaction::PgReactionRepository;
