//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::Genre;
use crate::validation::non_blank;

/// Book row joined with its author's names, as returned by list/get.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookRecord {
    pub book_id: i64,
    pub title: String,
    pub year: i64,
    pub pages: i64,
    pub genre: Genre,
    pub first_name: String,
    pub last_name: String,
}

/// Create book request. The author is resolved by name, not by id.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBook {
    #[validate(custom(function = non_blank, message = "Title is required"))]
    pub title: String,
    #[validate(range(min = 1, message = "Year must be a positive integer"))]
    pub year: i64,
    #[validate(range(min = 1, message = "Pages must be a positive integer"))]
    pub pages: i64,
    pub genre: Genre,
    #[validate(custom(function = non_blank, message = "Author first name is required"))]
    pub author_first_name: String,
    #[validate(custom(function = non_blank, message = "Author last name is required"))]
    pub author_last_name: String,
}

/// Partial book update request. `authorId` is always required and is
/// checked against the author table before anything is written.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchBook {
    #[validate(custom(function = non_blank, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(range(min = 1, message = "Year must be a positive integer"))]
    pub year: Option<i64>,
    #[validate(range(min = 1, message = "Pages must be a positive integer"))]
    pub pages: Option<i64>,
    pub genre: Option<Genre>,
    #[validate(range(min = 1, message = "Author id must be a positive integer"))]
    pub author_id: i64,
}

impl PatchBook {
    /// True when the payload changes at least one book attribute.
    /// `authorId` alone does not qualify.
    pub fn has_changes(&self) -> bool {
        self.title.is_some() || self.year.is_some() || self.pages.is_some() || self.genre.is_some()
    }

    pub fn into_changes(self) -> BookChanges {
        BookChanges {
            title: self.title.map(|v| v.trim().to_string()),
            year: self.year,
            pages: self.pages,
            genre: self.genre,
            author_id: Some(self.author_id),
        }
    }
}

/// Validated values for a book insert.
#[derive(Debug)]
pub struct NewBook {
    pub title: String,
    pub year: i64,
    pub pages: i64,
    pub genre: Genre,
    pub author_id: i64,
}

/// Validated column values for a partial book update. Only the fields
/// carried here can ever reach the UPDATE statement.
#[derive(Debug, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub pages: Option<i64>,
    pub genre: Option<Genre>,
    pub author_id: Option<i64>,
}

impl BookChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.pages.is_none()
            && self.genre.is_none()
            && self.author_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_book_rejects_out_of_range_numbers() {
        let book = CreateBook {
            title: "Cosmos".to_string(),
            year: 0,
            pages: -3,
            genre: Genre::NonFiction,
            author_first_name: "Carl".to_string(),
            author_last_name: "Sagan".to_string(),
        };
        let errors = book.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
        assert!(errors.field_errors().contains_key("pages"));
    }

    #[test]
    fn create_book_rejects_unknown_fields() {
        let body: Result<CreateBook, _> = serde_json::from_str(
            r#"{
                "title": "The Hobbit",
                "year": 1937,
                "pages": 310,
                "genre": "fantasy",
                "authorFirstName": "J.R.R.",
                "authorLastName": "Tolkien",
                "isbn": "none"
            }"#,
        );
        assert!(body.is_err());
    }

    #[test]
    fn patch_with_only_author_id_changes_nothing() {
        let patch: PatchBook = serde_json::from_str(r#"{"authorId": 3}"#).unwrap();
        assert!(!patch.has_changes());
    }

    #[test]
    fn patch_requires_author_id() {
        let patch: Result<PatchBook, _> = serde_json::from_str(r#"{"year": 2000}"#);
        assert!(patch.is_err());
    }

    #[test]
    fn patch_changes_always_carry_the_author_id() {
        let patch: PatchBook =
            serde_json::from_str(r#"{"year": 2000, "pages": 500, "authorId": 3}"#).unwrap();
        assert!(patch.has_changes());
        let changes = patch.into_changes();
        assert_eq!(changes.author_id, Some(3));
        assert_eq!(changes.year, Some(2000));
        assert!(changes.title.is_none());
        assert!(changes.genre.is_none());
    }
}
