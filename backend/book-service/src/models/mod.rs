/// Data models for the book service
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A stored book. `id` is assigned by PostgreSQL on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl Book {
    pub fn from_input(id: i32, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            year: input.year,
        }
    }
}

/// Client payload for create and update. An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct BookInput {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(range(min = 1, message = "year must be a positive integer"))]
    pub year: i32,
}
