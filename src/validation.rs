//! Input validation for path parameters and request payloads.
//!
//! Everything in this module is pure and synchronous: raw client input goes
//! in, either a typed value or a field-keyed set of error messages comes out.
//! Nothing here touches the database.

use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

/// A failed validation: a summary plus one message per offending field,
/// keyed by the field name the client sent.
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    pub message: String,
    pub errors: BTreeMap<String, String>,
}

impl ValidationFailure {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), message.into());
        Self {
            message: "Invalid request data".to_string(),
            errors,
        }
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut map = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let Some(error) = field_errors.first() else {
                continue;
            };
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            map.insert(snake_to_camel(field), message);
        }
        Self {
            message: "Invalid request data".to_string(),
            errors: map,
        }
    }
}

/// Extract a positive integer id from a raw path parameter.
///
/// Rejects anything that is not a base-10 integer strictly greater than
/// zero, so `"abc"`, `"0"`, `"-1"` and `"3.5"` all fail while `"3"` passes.
fn positive_id(field: &'static str, raw: &str) -> Result<i64, ValidationFailure> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationFailure::single(
            field,
            format!("{} must be a positive integer", field),
        )),
    }
}

pub fn author_id(raw: &str) -> Result<i64, ValidationFailure> {
    positive_id("authorId", raw)
}

pub fn book_id(raw: &str) -> Result<i64, ValidationFailure> {
    positive_id("bookId", raw)
}

/// Custom `validator` rule: a string must keep at least one character
/// once surrounding whitespace is stripped.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("non_blank"));
    }
    Ok(())
}

/// A validated patch body must still change something. Both patch handlers
/// run this after schema validation; a book patch that carries only
/// `authorId` does not count as a change.
pub fn require_effective_patch(has_changes: bool) -> Result<(), ValidationFailure> {
    if has_changes {
        Ok(())
    } else {
        Err(ValidationFailure::single(
            "body",
            "You must provide at least one field to update.",
        ))
    }
}

/// Map a Rust field name back to the camelCase name the client used.
fn snake_to_camel(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
