//! Task form validation.
//!
//! Mirrors the server's `TaskRequest` constraints so bad input is rejected
//! before a request is made.

use crate::model::TaskRequest;
use crate::sanitize::sanitize_input;
use std::fmt;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
        }
    }

    pub fn max_chars(&self) -> usize {
        match self {
            Field::Title => TITLE_MAX_CHARS,
            Field::Description => DESCRIPTION_MAX_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    TooLong(Field),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::TooLong(field) => write!(
                f,
                "{} must not exceed {} characters",
                field.label(),
                field.max_chars()
            ),
        }
    }
}

/// One slot per form field; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Raw, unsanitized contents of the create/edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
}

impl TaskForm {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Sanitizes both fields and checks them. On success the sanitized
    /// payload is ready to send.
    pub fn validate(&self) -> Result<TaskRequest, FormErrors> {
        let title = sanitize_input(&self.title);
        let description = sanitize_input(&self.description);

        let errors = FormErrors {
            title: check(Field::Title, &title),
            description: check(Field::Description, &description),
        };

        if errors.is_empty() {
            Ok(TaskRequest { title, description })
        } else {
            Err(errors)
        }
    }
}

fn check(field: Field, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required(field))
    } else if value.chars().count() > field.max_chars() {
        Some(FieldError::TooLong(field))
    } else {
        None
    }
}
