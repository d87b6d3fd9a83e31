//! Infrastructure Database Layer
//!
//! PostgreSQL adapter for the game catalog, built on SQLx. The crate
//! follows the repository pattern: [`PgGameRepository`] implements the
//! `domain_game::GameRepository` port, hiding every database detail from
//! the domain layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgGameRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/games")).await?;
//! let repo = PgGameRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::PgGameRepository;
