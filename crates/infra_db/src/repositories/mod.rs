//! Repository implementations
//!
//! Each repository adapts a domain port to PostgreSQL.

pub mod game;

pub use game::PgGameRepository;
