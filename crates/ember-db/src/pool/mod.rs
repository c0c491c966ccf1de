//! Connection pool management

mod postgres;

pub use postgres::{create_lazy_pool, create_pool};
pub use sqlx::PgPool;
