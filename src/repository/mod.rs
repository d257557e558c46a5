//! Repository layer for database operations

pub mod authors;
pub mod books;

use sqlx::SqlitePool;

/// Main repository struct holding the database connection pool.
///
/// Created once at startup and injected through `AppState`; nothing in the
/// crate holds a connection outside of it.
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }
}
