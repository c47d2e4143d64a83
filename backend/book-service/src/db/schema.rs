use sqlx::PgPool;
use tracing::info;

use crate::error::Result;

/// Ensure the `books` table exists.
///
/// Safe to run on every start; an existing table is left untouched.
pub async fn ensure_books_table(pool: &PgPool) -> Result<()> {
    info!("Ensuring books table exists");

    sqlx::query(BOOKS_TABLE).execute(pool).await?;

    Ok(())
}

const BOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    year INT NOT NULL
)
"#;
