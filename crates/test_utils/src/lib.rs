//! Test Utilities
//!
//! Shared builders and fixtures for the game catalog test suites. Kept in a
//! separate crate so domain, infrastructure, and API tests construct their
//! data the same way.

pub mod builders;
pub mod fixtures;

pub use builders::GameBuilder;
pub use fixtures::{admin, catan, reader, sample_inputs, seeded_repository};
