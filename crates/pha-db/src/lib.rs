//! # pha-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `pha-core`. It handles:
//!
//! - Connection pool management and embedded schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Translation of constraint errors into `ConstraintViolation`
//!
//! In-memory repositories with the same constraint behaviour live in
//! [`memory`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pha_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use pha_db::repositories::PgUserRepository;
//! use pha_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgres://localhost/pha");
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!
//!     let user_repo = PgUserRepository::new(pool);
//!     let user = user_repo.find_by_phone_number("01012345678").await?;
//!     Ok(())
//! }
//! ```

mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemorySessionRepository, MemoryUserRepository};
pub use pool::{create_lazy_pool, create_pool, ping, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgSessionRepository, PgUserRepository};
