//! Error types for Bookbase server

use std::backtrace::Backtrace;
use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use once_cell::sync::OnceCell;
use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationFailure;

/// Whether 500 responses carry a captured backtrace. Set once at startup
/// from the `debug` config flag; defaults to off.
static DEBUG_MODE: OnceCell<bool> = OnceCell::new();

pub fn set_debug_mode(enabled: bool) {
    let _ = DEBUG_MODE.set(enabled);
}

fn debug_mode() -> bool {
    DEBUG_MODE.get().copied().unwrap_or(false)
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {}", .0.message)]
    Validation(ValidationFailure),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        AppError::Validation(failure)
    }
}

/// Body of a 400 validation response: a summary plus per-field messages.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: BTreeMap<String, String>,
}

/// Body of a 404 response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct NotFoundResponse {
    pub message: String,
}

/// Body of an unexpected-failure response. The stack is empty unless
/// debug mode is enabled.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ServerErrorResponse {
    pub error: ServerErrorDetail,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ServerErrorDetail {
    pub message: String,
    pub stack: String,
}

fn server_error_response(message: &str) -> Response {
    let stack = if debug_mode() {
        Backtrace::force_capture().to_string()
    } else {
        String::new()
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ServerErrorResponse {
            error: ServerErrorDetail {
                message: message.to_string(),
                stack,
            },
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(failure) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse {
                    message: failure.message,
                    errors: failure.errors,
                }),
            )
                .into_response(),
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(NotFoundResponse { message })).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                server_error_response("Server error")
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                server_error_response("Server error")
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
