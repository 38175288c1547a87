//! Custom error types for the common library
//!
//! This module defines the database error types shared across the backend
//! services.

use std::time::Duration;

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred while establishing a database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// The operation did not complete within its deadline
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration error, detected before any connection attempt
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
