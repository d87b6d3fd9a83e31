//! Ports and adapters infrastructure
//!
//! Each domain defines a port trait for the operations it needs from its
//! data source; adapters implement the trait for a concrete backend
//! (in-memory for tests, PostgreSQL for production). All adapters share the
//! `PortError` taxonomy so callers handle failures uniformly regardless of
//! which backend is wired in.

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The persistence layer could not complete the operation
    #[error("Store error: {message}")]
    Store {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Store error without a source
    pub fn store(message: impl Into<String>) -> Self {
        PortError::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Store error wrapping an underlying cause
    pub fn store_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortError::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Game", "GAME-123");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Game"));
        assert!(error.to_string().contains("GAME-123"));
    }

    #[test]
    fn test_port_error_store_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let error = PortError::store_with_source("write failed", io);
        assert!(!error.is_not_found());
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_validation_message() {
        let error = PortError::validation("title is required");
        assert!(error.to_string().contains("title is required"));
    }
}
