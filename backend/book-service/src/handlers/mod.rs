/// HTTP handlers for book-service
///
/// - `books`: CRUD on `/books` and `/books/{id}`
/// - `health`: `/health` and `/health/live`
pub mod books;
pub mod health;

use actix_web::web;

pub use books::{create_book, delete_book, get_book, list_books, update_book};
pub use health::{health_summary, liveness_check, HealthState};

/// Full route table: book CRUD, probes and `/metrics`.
///
/// Expects `web::Data<BookService>` and `web::Data<HealthState>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_summary))
        .route("/health/live", web::get().to(liveness_check))
        .route("/metrics", web::get().to(crate::metrics::serve_metrics))
        .configure(books::configure);
}
