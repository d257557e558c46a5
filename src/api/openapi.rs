//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookbase API",
        version = "0.1.0",
        description = "Library Catalog REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "/api", description = "Catalog API")
    ),
    paths(
        // Health
        health::health_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            // Authors
            crate::models::author::Author,
            crate::models::author::CreateAuthor,
            crate::models::author::PatchAuthor,
            authors::AuthorCreatedResponse,
            // Books
            crate::models::book::BookRecord,
            crate::models::book::CreateBook,
            crate::models::book::PatchBook,
            crate::models::enums::Genre,
            books::BookCreatedResponse,
            // Shared
            crate::api::MessageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ValidationErrorResponse,
            crate::error::NotFoundResponse,
            crate::error::ServerErrorResponse,
            crate::error::ServerErrorDetail,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
