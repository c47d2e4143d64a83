/// Error types for the book service
///
/// One enum covers every failure a request can hit. It renders as a JSON
/// body for HTTP clients and as a `tonic::Status` for gRPC clients.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;
use tonic::Status;

/// Result type for book-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request body or path could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Book {0} not found")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    /// Message safe to return to clients. Storage details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.client_message(),
            "status": status.as_u16(),
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(_) | AppError::BadRequest(_) => {
                Status::invalid_argument(err.client_message())
            }
            AppError::NotFound(_) => Status::not_found(err.client_message()),
            AppError::Storage(_) => Status::internal(err.client_message()),
        }
    }
}
