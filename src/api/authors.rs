//! Author endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthor, PatchAuthor},
    validation,
};

use super::{MessageResponse, ValidatedJson};

/// Response for a successful author creation.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCreatedResponse {
    pub message: String,
    pub author_id: i64,
}

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = [Author])
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Author>>> {
    let authors = state.repository.authors.list().await?;
    Ok(Json(authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{authorId}",
    tag = "authors",
    params(
        ("authorId" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 400, description = "Invalid id", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::NotFoundResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<String>,
) -> AppResult<Json<Author>> {
    let id = validation::author_id(&author_id)?;

    let author = state
        .repository
        .authors
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))?;

    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorCreatedResponse),
        (status = 400, description = "Invalid input", body = crate::error::ValidationErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    ValidatedJson(author): ValidatedJson<CreateAuthor>,
) -> AppResult<(StatusCode, Json<AuthorCreatedResponse>)> {
    let author_id = state
        .repository
        .authors
        .insert(author.first_name.trim(), author.last_name.trim())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthorCreatedResponse {
            message: "Author created.".to_string(),
            author_id,
        }),
    ))
}

/// Partially update an author
#[utoipa::path(
    patch,
    path = "/authors/{authorId}",
    tag = "authors",
    params(
        ("authorId" = i64, Path, description = "Author ID")
    ),
    request_body = PatchAuthor,
    responses(
        (status = 200, description = "Author updated", body = MessageResponse),
        (status = 400, description = "Invalid input or empty patch", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::NotFoundResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<String>,
    ValidatedJson(patch): ValidatedJson<PatchAuthor>,
) -> AppResult<Json<MessageResponse>> {
    let id = validation::author_id(&author_id)?;
    validation::require_effective_patch(patch.has_changes())?;

    let affected = state
        .repository
        .authors
        .update(id, &patch.into_changes())
        .await?;

    if affected == 0 {
        // Zero rows can mean a missing target or a value-for-value no-op;
        // only an existence re-check can tell them apart.
        if !state.repository.authors.exists(id).await? {
            return Err(AppError::NotFound(format!(
                "Author with id {} not found",
                id
            )));
        }
        return Ok(Json(MessageResponse::new("Author unchanged.")));
    }

    Ok(Json(MessageResponse::new("Author updated.")))
}

/// Delete an author and, through the schema cascade, all of their books
#[utoipa::path(
    delete,
    path = "/authors/{authorId}",
    tag = "authors",
    params(
        ("authorId" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 400, description = "Invalid id", body = crate::error::ValidationErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::NotFoundResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(author_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = validation::author_id(&author_id)?;

    let affected = state.repository.authors.delete(id).await?;
    if affected == 0 {
        return Err(AppError::NotFound(format!(
            "Author with id {} not found",
            id
        )));
    }

    Ok(Json(MessageResponse::new("Author deleted.")))
}
