//! Error types for port operations.

use dragonbane_domain::DomainError;

/// Character store errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Stored JSON list columns could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A stored row names a kin, profession or skill the catalogs don't know.
    #[error("Invalid stored character: {0}")]
    Domain(#[from] DomainError),
}

impl StoreError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Serialization error.
    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NarratorError {
    #[error("Narrator request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// The model answered, but no summary object could be pulled out of it.
    #[error("Could not parse narrative summary: {0}")]
    Unparseable(String),
}
