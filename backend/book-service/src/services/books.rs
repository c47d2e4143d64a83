/// Book usecase - logs and records metrics around each repository call
use crate::db::BookRepository;
use crate::error::{AppError, Result};
use crate::metrics::books::record_operation;
use crate::models::{Book, BookInput};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct BookService {
    repo: Arc<dyn BookRepository>,
}

fn outcome<T>(result: &Result<T>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(AppError::NotFound(_)) => "not_found",
        Err(AppError::Validation(_)) | Err(AppError::BadRequest(_)) => "invalid",
        Err(AppError::Storage(_)) => "error",
    }
}

impl BookService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self { repo }
    }

    pub async fn add_book(&self, input: BookInput) -> Result<Book> {
        let started = Instant::now();
        info!(title = %input.title, author = %input.author, "Adding book");

        let result = self.repo.create(&input).await;
        record_operation("create", outcome(&result), started);

        match &result {
            Ok(book) => info!(book_id = book.id, "Book added successfully"),
            Err(e) => error!(error = %e, "Failed to add book"),
        }
        result
    }

    pub async fn get_books(&self) -> Result<Vec<Book>> {
        let started = Instant::now();
        info!("Fetching all books");

        let result = self.repo.find_all().await;
        record_operation("list", outcome(&result), started);

        match &result {
            Ok(books) => info!(count = books.len(), "Books fetched successfully"),
            Err(e) => error!(error = %e, "Failed to fetch books"),
        }
        result
    }

    pub async fn get_book(&self, id: i32) -> Result<Book> {
        let started = Instant::now();
        info!(book_id = id, "Fetching book");

        let result = self.repo.find_by_id(id).await;
        record_operation("get", outcome(&result), started);

        match &result {
            Ok(_) => info!(book_id = id, "Book fetched successfully"),
            Err(e) => error!(book_id = id, error = %e, "Failed to fetch book"),
        }
        result
    }

    /// Full replace of title, author and year for `book.id`.
    pub async fn update_book(&self, book: Book) -> Result<Book> {
        let started = Instant::now();
        let id = book.id;
        info!(book_id = id, "Updating book");

        let result = self.repo.update(&book).await;
        record_operation("update", outcome(&result), started);

        match &result {
            Ok(_) => info!(book_id = id, "Book updated successfully"),
            Err(e) => error!(book_id = id, error = %e, "Failed to update book"),
        }
        result
    }

    pub async fn delete_book(&self, id: i32) -> Result<()> {
        let started = Instant::now();
        info!(book_id = id, "Deleting book");

        let result = self.repo.delete(id).await;
        record_operation("delete", outcome(&result), started);

        match &result {
            Ok(()) => info!(book_id = id, "Book deleted successfully"),
            Err(e) => error!(book_id = id, error = %e, "Failed to delete book"),
        }
        result
    }
}
