//! Builder for a [`HealthManager`] wired to the service's dependencies

use crate::checks::HealthCheck;
use crate::manager::HealthManager;
use std::sync::Arc;
use tonic_health::pb::health_server::{Health, HealthServer};

/// Builder for HealthManager with common dependency checks
///
/// ```rust,no_run
/// use grpc_health::{HealthManagerBuilder, PostgresHealthCheck};
/// use sqlx::PgPool;
/// use std::sync::Arc;
///
/// # async fn example(pg_pool: PgPool) {
/// let (health_manager, health_service) = HealthManagerBuilder::new()
///     .with_check(Arc::new(PostgresHealthCheck::new(pg_pool)))
///     .with_service_name("bookshelf.book_service.v1.BookService")
///     .build()
///     .await;
/// # }
/// ```
#[derive(Default)]
pub struct HealthManagerBuilder {
    checks: Vec<Arc<dyn HealthCheck>>,
    services: Vec<String>,
}

impl HealthManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an already-constructed check, e.g. one shared with the HTTP probe.
    pub fn with_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.checks.push(check);
        self
    }

    /// Report status under a fully-qualified gRPC service name too
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.services.push(name.into());
        self
    }

    /// Returns the manager and the `HealthServer` to add to the gRPC server.
    pub async fn build(self) -> (HealthManager, HealthServer<impl Health>) {
        let (mut manager, service) = HealthManager::new();

        for check in self.checks {
            manager.register_check(check).await;
        }
        for name in self.services {
            manager.track_service(name);
        }

        (manager, service)
    }
}
