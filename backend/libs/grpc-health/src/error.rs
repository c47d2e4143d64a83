//! Error types for health check operations

use thiserror::Error;

/// Result type for health check operations
pub type Result<T> = std::result::Result<T, HealthCheckError>;

/// Errors that can occur during health checks
#[derive(Debug, Error)]
pub enum HealthCheckError {
    /// Database connection or query failure
    #[error("Database health check failed: {0}")]
    Database(String),

    /// The check did not finish in time
    #[error("Health check timed out after {0}ms")]
    Timeout(u64),

    #[error("Health check failed: {0}")]
    Generic(String),
}

impl HealthCheckError {
    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create a generic error
    pub fn generic(msg: impl Into<String>) -> Self {
        Self::Generic(msg.into())
    }
}
