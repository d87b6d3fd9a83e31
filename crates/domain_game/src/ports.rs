//! Game repository port
//!
//! The [`GameRepository`] trait defines everything the game domain needs
//! from its data source. Adapters implement it for a concrete backend:
//!
//! - **In-memory** ([`crate::memory::InMemoryGameRepository`]) for tests
//!   and lightweight deployments
//! - **PostgreSQL** (`infra_db::PgGameRepository`) for production
//!
//! The service layer receives the port as `Arc<dyn GameRepository>`, so
//! backends can be swapped without touching the handler.

use async_trait::async_trait;

use core_kernel::{DomainPort, GameId, Page, PageRequest, PortError};

use crate::game::Game;

/// Port trait for game persistence
///
/// All five operations are safe to invoke concurrently from multiple
/// callers. Each is atomic only with respect to the single record (or page
/// snapshot) it touches; there is no cross-record transaction and no
/// optimistic locking. Concurrent update/delete on the same identity may
/// race, which is why `update` reports NotFound for a vanished identity
/// and `delete` tolerates an already-absent one.
#[async_trait]
pub trait GameRepository: DomainPort {
    /// Retrieves a game by identity
    ///
    /// Absent records are `Ok(None)`, not an error. No side effects.
    async fn get_by_id(&self, id: GameId) -> Result<Option<Game>, PortError>;

    /// Returns one page of games in ascending identity order
    ///
    /// Identity order equals creation order (UUID v7), so the result is
    /// deterministic for a fixed dataset and fixed request. The envelope
    /// carries the total record count.
    async fn get_page(&self, request: PageRequest) -> Result<Page<Game>, PortError>;

    /// Persists a new game
    ///
    /// The identity was assigned by [`Game::new`]; the adapter rejects a
    /// duplicate identity with `PortError::Conflict` and reports
    /// `PortError::Store` when persistence cannot complete. Data is never
    /// dropped silently.
    async fn create(&self, game: Game) -> Result<Game, PortError>;

    /// Overwrites the mutable fields of an existing game
    ///
    /// Fails with `PortError::NotFound` if the identity no longer exists,
    /// which callers only hit when the record was deleted between their
    /// fetch and this write.
    async fn update(&self, game: &Game) -> Result<(), PortError>;

    /// Removes the game with this identity if present
    ///
    /// A no-op (`Ok`) when the record is already absent, so concurrent
    /// deletes stay safe.
    async fn delete(&self, id: GameId) -> Result<(), PortError>;
}
