//! Game resource service
//!
//! Translates external requests into repository operations. Every mutating
//! operation checks the caller's role before any repository access, then
//! validates input, then resolves existence. That ordering is part of the
//! contract: an unauthorized caller always sees Forbidden and never learns
//! whether the target record exists.

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::{GameId, Page, PageRequest};

use crate::error::GameError;
use crate::game::{Game, GameInput};
use crate::ports::GameRepository;
use crate::principal::{Principal, ADMIN_ROLE};

/// Role-gated CRUD service over a [`GameRepository`]
///
/// Holds no per-request state; a single instance is shared across all
/// concurrent callers.
#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository>,
}

impl GameService {
    /// Creates a service over the given repository
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    /// Lists one page of games
    ///
    /// No authorization beyond being authenticated; the page envelope is
    /// returned unchanged from the repository.
    pub async fn list(
        &self,
        _principal: &Principal,
        request: PageRequest,
    ) -> Result<Page<Game>, GameError> {
        Ok(self.repository.get_page(request).await?)
    }

    /// Fetches a single game by identifier
    ///
    /// Empty, whitespace-only, or unparseable identifiers are NotFound
    /// without touching the repository.
    pub async fn get(&self, _principal: &Principal, id: &str) -> Result<Game, GameError> {
        let id = parse_id(id)?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| GameError::not_found(id))
    }

    /// Creates a new game
    ///
    /// Requires the admin role, checked before validation and before any
    /// repository access. Returns the created record with its assigned
    /// identity, which the boundary layer uses to build a location
    /// reference.
    pub async fn create(
        &self,
        principal: &Principal,
        input: GameInput,
    ) -> Result<Game, GameError> {
        require_role(principal, ADMIN_ROLE)?;
        input.validate().map_err(GameError::BadRequest)?;

        let created = self.repository.create(Game::new(&input)).await?;
        info!(game_id = %created.id, user = %principal.subject, "game created");
        Ok(created)
    }

    /// Updates an existing game's mutable fields
    ///
    /// Role check first, then input validation, then existence. The input
    /// mapping preserves the stored identity.
    pub async fn update(
        &self,
        principal: &Principal,
        id: &str,
        input: GameInput,
    ) -> Result<Game, GameError> {
        require_role(principal, ADMIN_ROLE)?;
        input.validate().map_err(GameError::BadRequest)?;

        let id = parse_id(id)?;
        let mut game = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| GameError::not_found(id))?;

        input.apply_to(&mut game);
        match self.repository.update(&game).await {
            Ok(()) => Ok(game),
            Err(e) if e.is_not_found() => {
                // Race path: the record vanished between our fetch and the
                // write. Not reachable in normal flow.
                warn!(game_id = %id, "game deleted concurrently during update");
                Err(GameError::not_found(id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a game by identifier
    ///
    /// Existence is re-checked here even though the repository delete
    /// tolerates absence: a handler-level delete of a missing record must
    /// report NotFound.
    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<(), GameError> {
        require_role(principal, ADMIN_ROLE)?;

        let id = parse_id(id)?;
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(GameError::not_found(id));
        }

        self.repository.delete(id).await?;
        info!(game_id = %id, user = %principal.subject, "game deleted");
        Ok(())
    }
}

/// Guard clause for role-gated operations
///
/// Evaluated before any repository access so response shape never leaks
/// record existence to unauthorized callers.
fn require_role(principal: &Principal, role: &str) -> Result<(), GameError> {
    if principal.has_role(role) {
        Ok(())
    } else {
        Err(GameError::forbidden(role))
    }
}

/// Parses a caller-supplied identifier
///
/// Empty and whitespace-only strings are rejected here so no repository
/// call is made for them; a malformed identifier cannot name any record,
/// so it maps to NotFound as well.
fn parse_id(id: &str) -> Result<GameId, GameError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(GameError::NotFound("(empty id)".to_string()));
    }
    trimmed
        .parse::<GameId>()
        .map_err(|_| GameError::NotFound(trimmed.to_string()))
}
