/// Database access layer
///
/// - `book_repo`: the `BookRepository` seam and its PostgreSQL implementation
/// - `schema`: idempotent `books` table bootstrap run at startup
pub mod book_repo;
pub mod schema;

pub use book_repo::{BookRepository, PgBookRepository};
pub use schema::ensure_books_table;
