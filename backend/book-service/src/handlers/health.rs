/// Operational endpoints: health, liveness
use actix_web::{web, HttpResponse};
use grpc_health::HealthCheck;
use std::sync::Arc;

/// Dependency checks behind `GET /health`
pub struct HealthState {
    checks: Vec<Arc<dyn HealthCheck>>,
}

impl HealthState {
    pub fn new(checks: Vec<Arc<dyn HealthCheck>>) -> Self {
        Self { checks }
    }
}

pub async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    for check in &state.checks {
        if let Err(e) = check.check().await {
            tracing::warn!(dependency = check.name(), error = %e, "Health check failed");
            return HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": format!("{} check failed: {}", check.name(), e),
                "service": "book-service"
            }));
        }
    }

    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "book-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
