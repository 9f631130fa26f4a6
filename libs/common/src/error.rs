//! Shared error types for the photoshare services
//!
//! Store-level failures are kept apart from request-level failures so the
//! services can surface them unchanged instead of folding everything into
//! a generic 500.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Error raised by the persistence layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not establish a database connection
    #[error("database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A query against the store failed
    #[error("database query error: {0}")]
    Query(#[from] SqlxError),

    /// Applying the embedded migrations failed
    #[error("database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store configuration itself is unusable
    #[error("database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
