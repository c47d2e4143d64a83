/// Book Service Library
///
/// CRUD for a single `books` table, served over REST/JSON (actix-web) and
/// gRPC (tonic).
///
/// # Modules
///
/// - `models`: `Book` record and validated `BookInput` payload
/// - `db`: `BookRepository` trait, PostgreSQL implementation, schema bootstrap
/// - `services`: `BookService` usecase (logging + metrics around the repository)
/// - `handlers`: HTTP routes for books and operational probes
/// - `grpc`: `BookService` gRPC server and health reporting
/// - `error`: Error types and their HTTP/gRPC mappings
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and the `/metrics` handler
pub mod config;
pub mod db;
pub mod error;
pub mod grpc;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
