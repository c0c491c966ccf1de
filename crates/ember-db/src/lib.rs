//! # ember-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `ember-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - SQL migrations, including the `mark_expired_confessions()` sweep
//!   procedure and the reaction uniqueness constraint
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ember_common::AppConfig;
//! use ember_db::pool::create_pool;
//! use ember_db::repositories::PgConfessionRepository;
//! use ember_core::traits::ConfessionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let confession_repo = PgConfessionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_lazy_pool, create_pool, PgPool};
pub use repositories::{PgConfessionRepository, PgReactionRepository};
