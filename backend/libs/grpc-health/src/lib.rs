//! # gRPC Health Check Library
//!
//! Dependency health checks shared by the HTTP `/health` endpoint and the
//! standard `grpc.health.v1` service (served through tonic-health).
//!
//! ## Example
//!
//! ```ignore
//! use grpc_health::{HealthManager, HealthManagerBuilder, PostgresHealthCheck};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let (health_manager, health_service) = HealthManagerBuilder::new()
//!     .with_check(Arc::new(PostgresHealthCheck::new(pg_pool.clone())))
//!     .with_service_name("bookshelf.book_service.v1.BookService")
//!     .build()
//!     .await;
//!
//! let health_manager = Arc::new(tokio::sync::Mutex::new(health_manager));
//! HealthManager::start_background_check(health_manager.clone(), Duration::from_secs(10));
//!
//! // Add health_service to your gRPC server
//! ```

mod builder;
mod checks;
mod error;
mod health;
mod manager;

pub use builder::HealthManagerBuilder;
pub use checks::{HealthCheck, PostgresHealthCheck};
pub use error::{HealthCheckError, Result};
pub use health::HealthStatus;
pub use manager::HealthManager;
