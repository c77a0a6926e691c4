//! Unified error types for the domain layer
//!
//! Provides a common error type used across catalogs, the generation pipeline,
//! and stored-record validation, so adapters never have to fall back to
//! `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The bounded regenerate-until-match loop ran out of attempts
    #[error("No character matched the requested filters after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    /// A string did not map to any member of a closed catalog
    #[error("Unknown {catalog}: '{value}'")]
    InvalidCatalogValue {
        catalog: &'static str,
        value: String,
    },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Character name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for malformed value-object strings.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an error for a string that names no catalog member.
    ///
    /// Used by every `FromStr` on the catalog enums and when decoding stored
    /// records back into typed characters.
    pub fn invalid_catalog_value(catalog: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidCatalogValue {
            catalog,
            value: value.into(),
        }
    }

    /// Create an exhausted-attempts error
    pub fn generation_exhausted(attempts: u32) -> Self {
        Self::GenerationExhausted { attempts }
    }

    /// Check if this is a GenerationExhausted error.
    pub fn is_generation_exhausted(&self) -> bool {
        matches!(self, Self::GenerationExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_invalid_catalog_value_names_catalog_and_value() {
        let err = DomainError::invalid_catalog_value("kin", "Dragon");
        assert_eq!(err.to_string(), "Unknown kin: 'Dragon'");
    }

    #[test]
    fn test_generation_exhausted() {
        let err = DomainError::generation_exhausted(1000);
        assert!(err.is_generation_exhausted());
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("bad id");
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: bad id");
    }
}
