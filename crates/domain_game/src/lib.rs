//! Game Catalog Domain
//!
//! This crate holds the resource access contract for the catalog:
//!
//! - The [`Game`](game::Game) entity and its write-side
//!   [`GameInput`](game::GameInput) representation
//! - The [`GameRepository`](ports::GameRepository) port with an in-memory
//!   adapter for tests and lightweight deployments
//! - The [`GameService`](service::GameService) resource handler, which
//!   enforces role preconditions and input validation before any
//!   repository access
//!
//! The handler layer never talks to a transport; it receives an
//! already-authenticated [`Principal`](principal::Principal) and returns
//! domain results that the HTTP boundary maps onto status codes.

pub mod error;
pub mod game;
pub mod memory;
pub mod ports;
pub mod principal;
pub mod service;

pub use error::GameError;
pub use game::{Game, GameInput};
pub use memory::InMemoryGameRepository;
pub use ports::GameRepository;
pub use principal::{Principal, ADMIN_ROLE};
pub use service::GameService;
