#![allow(dead_code)]

use async_trait::async_trait;
use book_service::db::BookRepository;
use book_service::error::{AppError, Result};
use book_service::models::{Book, BookInput};
use book_service::services::BookService;
use grpc_health::{HealthCheck, HealthCheckError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// `BookRepository` over a map, ids assigned like a SERIAL column.
#[derive(Default)]
pub struct InMemoryBookRepository {
    state: Mutex<(i32, BTreeMap<i32, Book>)>,
}

impl InMemoryBookRepository {
    pub async fn len(&self) -> usize {
        self.state.lock().await.1.len()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, input: &BookInput) -> Result<Book> {
        let mut state = self.state.lock().await;
        state.0 += 1;
        let book = Book::from_input(state.0, input.clone());
        state.1.insert(book.id, book.clone());
        Ok(book)
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.state.lock().await.1.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Book> {
        self.state
            .lock()
            .await
            .1
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    async fn update(&self, book: &Book) -> Result<Book> {
        let mut state = self.state.lock().await;
        match state.1.get_mut(&book.id) {
            Some(stored) => {
                *stored = book.clone();
                Ok(book.clone())
            }
            None => Err(AppError::NotFound(book.id)),
        }
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.state
            .lock()
            .await
            .1
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }
}

/// Every call fails the way a dropped database connection would.
pub struct UnavailableBookRepository;

#[async_trait]
impl BookRepository for UnavailableBookRepository {
    async fn create(&self, _input: &BookInput) -> Result<Book> {
        Err(AppError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Err(AppError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Book> {
        Err(AppError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _book: &Book) -> Result<Book> {
        Err(AppError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> Result<()> {
        Err(AppError::Storage(sqlx::Error::PoolTimedOut))
    }
}

pub struct StaticHealthCheck {
    pub healthy: bool,
}

#[async_trait]
impl HealthCheck for StaticHealthCheck {
    fn name(&self) -> &str {
        "static"
    }

    async fn check(&self) -> grpc_health::Result<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(HealthCheckError::database("connection refused"))
        }
    }
}

pub fn in_memory_service() -> (BookService, Arc<InMemoryBookRepository>) {
    let repo = Arc::new(InMemoryBookRepository::default());
    (BookService::new(repo.clone()), repo)
}

pub fn dune() -> BookInput {
    BookInput {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        year: 1965,
    }
}
