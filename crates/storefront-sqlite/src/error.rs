//! Error types for SQLite storage

use rusqlite::ErrorCode;
use storefront_core::StorageError;
use thiserror::Error;

/// SQLite storage error type
#[derive(Error, Debug)]
pub enum SqliteError {
    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema setup error
    #[error("Schema error: {0}")]
    Schema(String),

    /// Background task running the query failed
    #[error("Task error: {0}")]
    Task(String),

    /// Underlying rusqlite error
    #[error("SQLite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for SQLite operations
pub type SqliteResult<T> = Result<T, SqliteError>;

impl From<SqliteError> for StorageError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Connection(msg) => Self::Backend(msg),
            SqliteError::Schema(msg) => Self::Configuration(msg),
            SqliteError::Task(msg) => Self::Backend(msg),
            SqliteError::Rusqlite(e) => match e.sqlite_error_code() {
                Some(ErrorCode::ConstraintViolation) => Self::Constraint(e.to_string()),
                _ => Self::Query(e.to_string()),
            },
        }
    }
}
