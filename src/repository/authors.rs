//! Authors repository for database operations

use sqlx::SqlitePool;

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorChanges},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: SqlitePool,
}

impl AuthorsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All authors in insertion order.
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT author_id, first_name, last_name
            FROM author
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Get author by ID; None when no row matches.
    pub async fn get(&self, id: i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT author_id, first_name, last_name
            FROM author
            WHERE author_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Insert a new author and return the generated id.
    pub async fn insert(&self, first_name: &str, last_name: &str) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO author (first_name, last_name)
            VALUES (?, ?)
            RETURNING author_id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Update an existing author, returning the number of rows affected.
    ///
    /// The SET clause is assembled from column literals only; client input
    /// never reaches the query text.
    pub async fn update(&self, id: i64, changes: &AuthorChanges) -> AppResult<u64> {
        let mut sets: Vec<&'static str> = Vec::new();

        macro_rules! add_field {
            ($field:expr, $column:expr) => {
                if $field.is_some() {
                    sets.push(concat!($column, " = ?"));
                }
            };
        }

        add_field!(changes.first_name, "first_name");
        add_field!(changes.last_name, "last_name");

        if sets.is_empty() {
            return Err(AppError::Internal(
                "author update requires at least one column".to_string(),
            ));
        }

        let query = format!("UPDATE author SET {} WHERE author_id = ?", sets.join(", "));

        let mut builder = sqlx::query(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(changes.first_name);
        bind_field!(changes.last_name);

        let result = builder.bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    /// Delete an author, returning the number of rows affected. The schema
    /// cascades deletion to the author's books.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM author WHERE author_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Check that an author row exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM author WHERE author_id = ?)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Resolve an author id from an exact first/last name pair.
    ///
    /// Names are not unique; when several authors share one, the lowest id
    /// wins.
    pub async fn find_by_name(&self, first_name: &str, last_name: &str) -> AppResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT author_id
            FROM author
            WHERE first_name = ? AND last_name = ?
            ORDER BY author_id
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }
}
