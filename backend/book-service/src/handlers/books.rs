/// Book handlers - HTTP endpoints for book CRUD
use crate::error::{AppError, Result};
use crate::models::{Book, BookInput};
use crate::services::BookService;
use actix_web::{web, HttpResponse};
use validator::Validate;

/// Create a new book
pub async fn create_book(
    service: web::Data<BookService>,
    req: web::Json<BookInput>,
) -> Result<HttpResponse> {
    let input = req.into_inner();
    input.validate()?;

    let book = service.add_book(input).await?;

    Ok(HttpResponse::Created().json(book))
}

/// List all books
pub async fn list_books(service: web::Data<BookService>) -> Result<HttpResponse> {
    let books = service.get_books().await?;

    Ok(HttpResponse::Ok().json(books))
}

/// Get a book by ID
pub async fn get_book(
    service: web::Data<BookService>,
    book_id: web::Path<i32>,
) -> Result<HttpResponse> {
    let book = service.get_book(book_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(book))
}

/// Replace title, author and year of a book. The id comes from the path.
pub async fn update_book(
    service: web::Data<BookService>,
    book_id: web::Path<i32>,
    req: web::Json<BookInput>,
) -> Result<HttpResponse> {
    let input = req.into_inner();
    input.validate()?;

    let book = service
        .update_book(Book::from_input(book_id.into_inner(), input))
        .await?;

    Ok(HttpResponse::Ok().json(book))
}

/// Delete a book
pub async fn delete_book(
    service: web::Data<BookService>,
    book_id: web::Path<i32>,
) -> Result<HttpResponse> {
    service.delete_book(book_id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Register `/books` routes plus extractor configs that turn decode
/// failures into the JSON 400 body.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/books")
            .route(web::post().to(create_book))
            .route(web::get().to(list_books)),
    )
    .service(
        web::resource("/books/{book_id}")
            .route(web::get().to(get_book))
            .route(web::put().to(update_book))
            .route(web::delete().to(delete_book)),
    );
}
