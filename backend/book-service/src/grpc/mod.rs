//! gRPC transport for book-service
//!
//! Serves `bookshelf.book_service.v1.BookService` next to the standard
//! `grpc.health.v1.Health` service.

pub mod server;

pub use server::*;
