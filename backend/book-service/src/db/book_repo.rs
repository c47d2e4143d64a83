use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{AppError, Result};
use crate::models::{Book, BookInput};

/// Storage contract for books. One SQL statement per call, no transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new row and return it with the generated id
    async fn create(&self, input: &BookInput) -> Result<Book>;

    /// All rows, ordered by id. An empty table is an empty vec.
    async fn find_all(&self) -> Result<Vec<Book>>;

    async fn find_by_id(&self, id: i32) -> Result<Book>;

    /// Overwrite title/author/year of the row with `book.id`
    async fn update(&self, book: &Book) -> Result<Book>;

    async fn delete(&self, id: i32) -> Result<()>;
}

/// PostgreSQL-backed [`BookRepository`]
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, input: &BookInput) -> Result<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, year)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, year
            "#,
        )
        .bind(&input.title)
        .bind(&input.author)
        .bind(input.year)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn find_by_id(&self, id: i32) -> Result<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(id))
    }

    async fn update(&self, book: &Book) -> Result<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, year = $3
            WHERE id = $4
            RETURNING id, title, author, year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year)
        .bind(book.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound(book.id))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id));
        }

        Ok(())
    }
}
