//! Core Kernel - Foundational types for the game catalog system
//!
//! This crate provides the fundamental building blocks used across all layers:
//! - Strongly-typed identifiers
//! - Pagination envelope and request normalization
//! - Port error taxonomy shared by all repository adapters

pub mod identifiers;
pub mod page;
pub mod ports;

pub use identifiers::GameId;
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use ports::{DomainPort, PortError};
