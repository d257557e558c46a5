//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fixed set of genres a book may carry. Stored as TEXT and exposed
/// over the wire in kebab-case; anything outside the set is rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum Genre {
    Fantasy,
    SciFi,
    Mystery,
    NonFiction,
    Fiction,
    Romance,
    Horror,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fantasy => "fantasy",
            Genre::SciFi => "sci-fi",
            Genre::Mystery => "mystery",
            Genre::NonFiction => "non-fiction",
            Genre::Fiction => "fiction",
            Genre::Romance => "romance",
            Genre::Horror => "horror",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
