//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::non_blank;

/// Author row as persisted. Serialized with its column names, so clients
/// see `author_id`/`first_name`/`last_name`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Author {
    pub author_id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAuthor {
    #[validate(custom(function = non_blank, message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = non_blank, message = "Last name is required"))]
    pub last_name: String,
}

/// Partial author update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchAuthor {
    #[validate(custom(function = non_blank, message = "First name is required"))]
    pub first_name: Option<String>,
    #[validate(custom(function = non_blank, message = "Last name is required"))]
    pub last_name: Option<String>,
}

impl PatchAuthor {
    pub fn has_changes(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    pub fn into_changes(self) -> AuthorChanges {
        AuthorChanges {
            first_name: self.first_name.map(|v| v.trim().to_string()),
            last_name: self.last_name.map(|v| v.trim().to_string()),
        }
    }
}

/// Validated column values for a partial author update. Only the fields
/// carried here can ever reach the UPDATE statement.
#[derive(Debug, Default)]
pub struct AuthorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl AuthorChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}
