/// Usecase layer for book-service
///
/// Each operation logs, delegates to the repository and returns its result
/// unchanged.
pub mod books;

pub use books::BookService;
