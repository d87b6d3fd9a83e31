//! Game domain errors
//!
//! The resource handler maps every outcome onto this taxonomy. The boundary
//! layer translates these to transport status codes; nothing in this crate
//! knows about HTTP.

use thiserror::Error;

use core_kernel::PortError;

/// Errors produced by the game resource handler
#[derive(Debug, Error)]
pub enum GameError {
    /// Caller lacks a required role; raised before any data access
    #[error("Forbidden: missing role '{0}'")]
    Forbidden(String),

    /// Identifier empty, malformed, or no matching record
    #[error("Game not found: {0}")]
    NotFound(String),

    /// Input model failed structural validation
    #[error("Invalid game input: {}", .0.join("; "))]
    BadRequest(Vec<String>),

    /// The persistence layer could not complete an operation
    #[error("Store failure: {0}")]
    Store(String),
}

impl GameError {
    /// Creates a NotFound error for an identifier
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        GameError::NotFound(id.to_string())
    }

    /// Creates a Forbidden error for a missing role
    pub fn forbidden(role: impl Into<String>) -> Self {
        GameError::Forbidden(role.into())
    }

    /// Returns true if this error indicates the record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, GameError::NotFound(_))
    }
}

impl From<PortError> for GameError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotFound { id, .. } => GameError::NotFound(id),
            PortError::Validation { message } => GameError::BadRequest(vec![message]),
            PortError::Conflict { message } => GameError::Store(message),
            PortError::Store { message, .. } => GameError::Store(message),
            PortError::Internal { message } => GameError::Store(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_joins_messages() {
        let error = GameError::BadRequest(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(error.to_string(), "Invalid game input: a; b");
    }

    #[test]
    fn test_port_not_found_maps_to_not_found() {
        let error: GameError = PortError::not_found("Game", "GAME-1").into();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_port_store_maps_to_store() {
        let error: GameError = PortError::store("connection refused").into();
        assert!(matches!(error, GameError::Store(_)));
    }
}
