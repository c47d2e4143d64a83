// gRPC service implementation for book service
use crate::error::AppError;
use crate::models::{Book, BookInput};
use crate::services::BookService;
use grpc_health::{HealthCheck, HealthManager, HealthManagerBuilder};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex};
use tonic::{Request, Response, Status};
use validator::Validate;

// Import generated proto code
pub mod bookshelf {
    pub mod book_service {
        pub mod v1 {
            tonic::include_proto!("bookshelf.book_service.v1");
        }
        pub use v1::*;
    }
}

use bookshelf::book_service as pb;
use pb::book_service_server::BookServiceServer;

impl From<Book> for pb::Book {
    fn from(book: Book) -> Self {
        pb::Book {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}

/// The message id is dropped here; callers that need it read it first.
impl From<pb::Book> for BookInput {
    fn from(book: pb::Book) -> Self {
        BookInput {
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}

fn validated(input: BookInput) -> Result<BookInput, Status> {
    input
        .validate()
        .map_err(|e| Status::from(AppError::from(e)))?;
    Ok(input)
}

/// BookService gRPC implementation
#[derive(Clone)]
pub struct BookServiceImpl {
    books: BookService,
}

impl BookServiceImpl {
    pub fn new(books: BookService) -> Self {
        Self { books }
    }
}

#[tonic::async_trait]
impl pb::book_service_server::BookService for BookServiceImpl {
    async fn create_book(&self, request: Request<pb::Book>) -> Result<Response<pb::Book>, Status> {
        let input = validated(request.into_inner().into())?;

        tracing::info!("gRPC: Creating book: {}", input.title);

        let book = self.books.add_book(input).await?;
        Ok(Response::new(book.into()))
    }

    async fn get_books(&self, _request: Request<()>) -> Result<Response<pb::BookList>, Status> {
        tracing::info!("gRPC: Listing books");

        let books = self.books.get_books().await?;
        Ok(Response::new(pb::BookList {
            books: books.into_iter().map(Into::into).collect(),
        }))
    }

    async fn get_book(&self, request: Request<pb::BookId>) -> Result<Response<pb::Book>, Status> {
        let id = request.into_inner().id;

        tracing::info!("gRPC: Getting book with ID: {}", id);

        let book = self.books.get_book(id).await?;
        Ok(Response::new(book.into()))
    }

    async fn update_book(&self, request: Request<pb::Book>) -> Result<Response<pb::Book>, Status> {
        let message = request.into_inner();
        let id = message.id;
        let input = validated(message.into())?;

        tracing::info!("gRPC: Updating book with ID: {}", id);

        let book = self.books.update_book(Book::from_input(id, input)).await?;
        Ok(Response::new(book.into()))
    }

    async fn delete_book(&self, request: Request<pb::BookId>) -> Result<Response<()>, Status> {
        let id = request.into_inner().id;

        tracing::info!("gRPC: Deleting book with ID: {}", id);

        self.books.delete_book(id).await?;
        Ok(Response::new(()))
    }
}

/// Fully-qualified name reported to `grpc.health.v1`
pub const BOOK_SERVICE_NAME: &str =
    <BookServiceServer<BookServiceImpl> as tonic::server::NamedService>::NAME;

/// Run the gRPC server until `shutdown` fires.
///
/// `health_check` drives the `grpc.health.v1` status, re-evaluated every
/// `health_interval`.
pub async fn start_grpc_server(
    addr: SocketAddr,
    books: BookService,
    health_check: Arc<dyn HealthCheck>,
    health_interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tonic::transport::Server;

    tracing::info!("Starting gRPC server at {}", addr);

    let (health_manager, health_service) = HealthManagerBuilder::new()
        .with_check(health_check)
        .with_service_name(BOOK_SERVICE_NAME)
        .build()
        .await;

    let health_manager = Arc::new(Mutex::new(health_manager));
    let initial = health_manager.lock().await.check_and_update().await;
    if !initial.is_serving() {
        tracing::warn!("Dependencies unhealthy at startup, grpc.health.v1 reports NOT_SERVING");
    }
    let health_task = HealthManager::start_background_check(health_manager, health_interval);

    let result = Server::builder()
        .add_service(health_service)
        .add_service(BookServiceServer::new(BookServiceImpl::new(books)))
        .serve_with_shutdown(addr, async move {
            // Wait for shutdown notification; ignore errors if sender dropped.
            let _ = shutdown.recv().await;
        })
        .await;

    health_task.abort();
    result?;

    tracing::info!("gRPC server stopped");
    Ok(())
}
