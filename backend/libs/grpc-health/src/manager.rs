//! Health check manager and background monitoring

use crate::checks::HealthCheck;
use crate::error::Result;
use crate::health::HealthStatus;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tonic_health::pb::health_server::{Health, HealthServer};
use tonic_health::server::HealthReporter;

/// Health check manager
///
/// Runs the registered dependency checks and publishes the result to the
/// gRPC health service, both for the overall server (`""`) and for every
/// named service registered with [`HealthManager::track_service`].
pub struct HealthManager {
    reporter: HealthReporter,
    checks: Arc<RwLock<Vec<Arc<dyn HealthCheck>>>>,
    services: Vec<String>,
    last_status: HealthStatus,
}

impl HealthManager {
    /// Returns the manager together with the `grpc.health.v1` server to
    /// mount on the tonic router.
    pub fn new() -> (Self, HealthServer<impl Health>) {
        let (reporter, service) = tonic_health::server::health_reporter();

        let manager = Self {
            reporter,
            checks: Arc::new(RwLock::new(Vec::new())),
            services: Vec::new(),
            last_status: HealthStatus::Unknown,
        };

        (manager, service)
    }

    pub async fn register_check(&self, check: Arc<dyn HealthCheck>) {
        self.checks.write().await.push(check);
    }

    /// Publish status for a fully-qualified gRPC service name as well as
    /// for the overall server.
    pub fn track_service(&mut self, service_name: impl Into<String>) {
        self.services.push(service_name.into());
    }

    pub fn last_status(&self) -> HealthStatus {
        self.last_status
    }

    /// Execute all registered health checks
    ///
    /// Returns `Ok(())` if all checks pass, or the first error encountered.
    pub async fn execute_checks(&self) -> Result<()> {
        let checks = self.checks.read().await;

        for check in checks.iter() {
            if let Err(e) = check.check().await {
                tracing::warn!(dependency = check.name(), error = %e, "Dependency check failed");
                return Err(e);
            }
        }

        Ok(())
    }

    /// Run the checks and push SERVING or NOT_SERVING to the reporter.
    pub async fn check_and_update(&mut self) -> HealthStatus {
        let status = match self.execute_checks().await {
            Ok(()) => HealthStatus::Serving,
            Err(_) => HealthStatus::NotServing,
        };

        if status != self.last_status {
            match status {
                HealthStatus::Serving => {
                    tracing::info!("All health checks passed, setting status to SERVING")
                }
                _ => tracing::error!("Health check failed, setting status to NOT_SERVING"),
            }
        }

        let serving: tonic_health::ServingStatus = status.into();
        self.reporter.set_service_status("", serving).await;
        for service in &self.services {
            self.reporter.set_service_status(service, serving).await;
        }

        self.last_status = status;
        status
    }

    /// Spawn a task that calls [`HealthManager::check_and_update`] every
    /// `interval`. Abort the returned handle to stop it.
    pub fn start_background_check(
        manager: Arc<tokio::sync::Mutex<Self>>,
        interval: Duration,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                let mut mgr = manager.lock().await;
                mgr.check_and_update().await;
            }
        })
    }
}
