//! Field-level request validation.
//!
//! Each check returns `Option<FieldError>` so callers can collect every
//! failing field into one 400 response instead of stopping at the first.

use chrono::Datelike;
use serde::Serialize;

/// A single failed check, tied to the request field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The field must be present and non-empty after trimming.
pub fn require_string(field: &'static str, value: Option<&str>) -> Option<FieldError> {
    match value {
        Some(s) if !s.trim().is_empty() => None,
        _ => Some(FieldError::new(field, format!("{field} is required"))),
    }
}

/// The field must be present and must not exceed the current calendar year.
pub fn year_not_in_future(field: &'static str, value: Option<i32>) -> Option<FieldError> {
    match value {
        None => Some(FieldError::new(field, format!("{field} is required"))),
        Some(year) if year > current_year() => Some(FieldError::new(
            field,
            format!("{field} is a future year which is not allowed"),
        )),
        Some(_) => None,
    }
}

/// The field must be present and contain at least one element.
pub fn require_non_empty_list<T>(field: &'static str, value: Option<&[T]>) -> Option<FieldError> {
    match value {
        Some(list) if !list.is_empty() => None,
        _ => Some(FieldError::new(
            field,
            format!("{field} cannot be empty"),
        )),
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}
