//! Health check implementations for external dependencies

use crate::error::{HealthCheckError, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Duration;

/// Trait for health check implementations
///
/// Implement this trait to create custom health checks for your dependencies.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Short dependency name used in logs and probe responses
    fn name(&self) -> &str;

    /// Perform the health check
    ///
    /// Returns `Ok(())` if the dependency is healthy, or an error describing the problem.
    async fn check(&self) -> Result<()>;
}

/// PostgreSQL health check
///
/// Verifies database connectivity by executing `SELECT 1` under a timeout.
pub struct PostgresHealthCheck {
    pool: PgPool,
    timeout: Duration,
}

impl PostgresHealthCheck {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl HealthCheck for PostgresHealthCheck {
    fn name(&self) -> &str {
        "postgres"
    }

    async fn check(&self) -> Result<()> {
        let query = sqlx::query("SELECT 1").execute(&self.pool);

        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(HealthCheckError::database(format!(
                "Failed to execute health check query: {}",
                e
            ))),
            Err(_) => Err(HealthCheckError::Timeout(self.timeout.as_millis() as u64)),
        }
    }
}
