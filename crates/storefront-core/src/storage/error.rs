//! Storage Error Types

use thiserror::Error;

/// Error type for catalog storage operations
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Create a generic backend error
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a query error
    pub fn query<S: Into<String>>(msg: S) -> Self {
        Self::Query(msg.into())
    }

    /// Check if the error came from a violated schema constraint
    /// (foreign key, NOT NULL, CHECK)
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}
