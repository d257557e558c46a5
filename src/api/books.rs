//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookRecord, CreateBook, NewBook, PatchBook},
    validation,
};

use super::{MessageResponse, ValidatedJson};

/// Response for a successful book creation.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookCreatedResponse {
    pub message: String,
    pub book_id: i64,
}

/// List all books with their author's names
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = [BookRecord])
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookRecord>>> {
    let books = state.repository.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookRecord),
        (status = 400, description = "Invalid id", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::NotFoundResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookRecord>> {
    let id = validation::book_id(&book_id)?;

    let book = state
        .repository
        .books
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

    Ok(Json(book))
}

/// Create a new book
///
/// The author is resolved by first/last name and must already exist;
/// there is no implicit author creation.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Invalid input", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::NotFoundResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ValidatedJson(book): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let first_name = book.author_first_name.trim();
    let last_name = book.author_last_name.trim();

    let author_id = state
        .repository
        .authors
        .find_by_name(first_name, last_name)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Author {} {} not found", first_name, last_name))
        })?;

    let book_id = state
        .repository
        .books
        .insert(&NewBook {
            title: book.title.trim().to_string(),
            year: book.year,
            pages: book.pages,
            genre: book.genre,
            author_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            message: "Book created.".to_string(),
            book_id,
        }),
    ))
}

/// Partially update a book
///
/// Every patch carries an `authorId`; it is checked against the author
/// table before the update runs, so a dangling id is rejected instead of
/// corrupting the relation.
#[utoipa::path(
    patch,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = i64, Path, description = "Book ID")
    ),
    request_body = PatchBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid input or empty patch", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Book or author not found", body = crate::error::NotFoundResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    ValidatedJson(patch): ValidatedJson<PatchBook>,
) -> AppResult<Json<MessageResponse>> {
    let id = validation::book_id(&book_id)?;
    validation::require_effective_patch(patch.has_changes())?;

    let author_id = patch.author_id;
    if !state.repository.authors.exists(author_id).await? {
        return Err(AppError::NotFound(format!(
            "Author with id {} not found",
            author_id
        )));
    }

    let affected = state
        .repository
        .books
        .update(id, &patch.into_changes())
        .await?;

    if affected == 0 {
        // Zero rows can mean a missing target or a value-for-value no-op;
        // only an existence re-check can tell them apart.
        if !state.repository.books.exists(id).await? {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        return Ok(Json(MessageResponse::new("Book unchanged.")));
    }

    Ok(Json(MessageResponse::new("Book updated.")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(
        ("bookId" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::NotFoundResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = validation::book_id(&book_id)?;

    let affected = state.repository.books.delete(id).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!("Book with id {} not found", id)));
    }

    Ok(Json(MessageResponse::new("Book deleted.")))
}
