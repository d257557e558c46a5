//! Books repository for database operations

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookChanges, BookRecord, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: SqlitePool,
}

impl BooksRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All books joined with their author's names, in insertion order.
    pub async fn list(&self) -> AppResult<Vec<BookRecord>> {
        let books = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT
                book.book_id,
                book.title,
                book.year,
                book.pages,
                book.genre,
                author.first_name,
                author.last_name
            FROM book INNER JOIN author
                ON book.author_id = author.author_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get a joined book row by ID; None when no row matches.
    pub async fn get(&self, id: i64) -> AppResult<Option<BookRecord>> {
        let book = sqlx::query_as::<_, BookRecord>(
            r#"
            SELECT
                book.book_id,
                book.title,
                book.year,
                book.pages,
                book.genre,
                author.first_name,
                author.last_name
            FROM book INNER JOIN author
                ON book.author_id = author.author_id
            WHERE book.book_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Insert a new book and return the generated id. The caller has
    /// already resolved `author_id` against the author table.
    pub async fn insert(&self, book: &NewBook) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO book (title, year, pages, genre, author_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING book_id
            "#,
        )
        .bind(&book.title)
        .bind(book.year)
        .bind(book.pages)
        .bind(book.genre)
        .bind(book.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Update an existing book, returning the number of rows affected.
    ///
    /// The SET clause is assembled from column literals only; client input
    /// never reaches the query text.
    pub async fn update(&self, id: i64, changes: &BookChanges) -> AppResult<u64> {
        let mut sets: Vec<&'static str> = Vec::new();

        macro_rules! add_field {
            ($field:expr, $column:expr) => {
                if $field.is_some() {
                    sets.push(concat!($column, " = ?"));
                }
            };
        }

        add_field!(changes.title, "title");
        add_field!(changes.year, "year");
        add_field!(changes.pages, "pages");
        add_field!(changes.genre, "genre");
        add_field!(changes.author_id, "author_id");

        if sets.is_empty() {
            return Err(AppError::Internal(
                "book update requires at least one column".to_string(),
            ));
        }

        let query = format!("UPDATE book SET {} WHERE book_id = ?", sets.join(", "));

        let mut builder = sqlx::query(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(changes.title);
        bind_field!(changes.year);
        bind_field!(changes.pages);
        bind_field!(changes.genre);
        bind_field!(changes.author_id);

        let result = builder.bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Delete a book, returning the number of rows affected.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM book WHERE book_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Check that a book row exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM book WHERE book_id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
