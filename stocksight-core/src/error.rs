//! Error types for stocksight operations

use thiserror::Error;

use crate::EntityKind;

/// Result type for stocksight operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Error taxonomy shared by the store, the analytics and the HTTP layer
#[derive(Error, Debug)]
pub enum InventoryError {
    /// `key` is the id as the caller wrote it, which may not be numeric
    #[error("{kind} not found: {key}")]
    NotFound { kind: EntityKind, key: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InventoryError {
    /// Create a new not-found error for an entity id
    pub fn not_found(kind: EntityKind, id: u64) -> Self {
        Self::NotFound {
            kind,
            key: id.to_string(),
        }
    }

    /// Create a new not-found error for a raw path key that names no entity
    pub fn not_found_key<S: Into<String>>(kind: EntityKind, key: S) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller is at fault (bad input or unknown id)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InventoryError::NotFound { .. } | InventoryError::Validation(_) | InventoryError::Json(_)
        )
    }

    /// Get the error category for logs and metrics
    pub fn category(&self) -> &'static str {
        match self {
            InventoryError::NotFound { .. } => "not_found",
            InventoryError::Validation(_) => "validation",
            InventoryError::Configuration(_) => "configuration",
            InventoryError::Internal(_) => "internal",
            InventoryError::Json(_) => "json",
        }
    }
}

impl From<validator::ValidationErrors> for InventoryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_kind_and_id() {
        let err = InventoryError::not_found(EntityKind::Product, 42);
        assert_eq!(err.to_string(), "product not found: 42");
        assert_eq!(err.category(), "not_found");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_not_found_for_unparseable_key() {
        let err = InventoryError::not_found_key(EntityKind::Store, "abc");
        assert_eq!(err.to_string(), "store not found: abc");
        assert_eq!(err.category(), "not_found");
    }

    #[test]
    fn test_internal_is_not_client_error() {
        let err = InventoryError::internal("boom");
        assert_eq!(err.category(), "internal");
        assert!(!err.is_client_error());
    }
}
