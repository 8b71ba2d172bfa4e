//! Payload validation producing field-level error maps.
//!
//! # Design
//! Validation is an explicit function per payload, independent of any web
//! framework: it consumes the raw `Option`-typed payload and either returns
//! the fully-typed input for the repository or a [`ValidationErrors`] map
//! that serializes directly as the 400 response body. All length bounds
//! count characters, not bytes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{NewTodo, TodoPatch, TodoStatus, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
use crate::repr::{CreateTodo, UpdateTodo};

/// Validation failures keyed by field name, each field carrying one or more
/// messages. Serializes as `{"title": ["..."], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded against `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }
}

impl CreateTodo {
    /// Validate a create payload into a [`NewTodo`].
    ///
    /// `title` and `description` are required, non-blank, and bounded;
    /// `status` defaults to not completed when absent and must be a known
    /// wire code when present.
    pub fn validate(self) -> Result<NewTodo, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = required_text(&mut errors, "title", self.title, TITLE_MAX_CHARS);
        let description =
            required_text(&mut errors, "description", self.description, DESCRIPTION_MAX_CHARS);
        let status = match self.status {
            None => Some(TodoStatus::default()),
            Some(code) => status_from_code(&mut errors, code),
        };

        match (title, description, status) {
            (Some(title), Some(description), Some(status)) => Ok(NewTodo {
                title,
                description,
                status,
            }),
            _ => Err(errors),
        }
    }
}

impl UpdateTodo {
    /// Validate an update payload into a [`TodoPatch`].
    ///
    /// Absent fields are dropped before validation; present fields obey the
    /// same rules as on create. An all-absent payload is a valid empty patch.
    pub fn validate(self) -> Result<TodoPatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = self
            .title
            .and_then(|value| bounded_text(&mut errors, "title", value, TITLE_MAX_CHARS));
        let description = self.description.and_then(|value| {
            bounded_text(&mut errors, "description", value, DESCRIPTION_MAX_CHARS)
        });
        let status = self
            .status
            .and_then(|code| status_from_code(&mut errors, code));

        if errors.is_empty() {
            Ok(TodoPatch {
                title,
                description,
                status,
            })
        } else {
            Err(errors)
        }
    }
}

fn required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    max_chars: usize,
) -> Option<String> {
    let Some(value) = value else {
        errors.push(field, "This field is required.");
        return None;
    };
    bounded_text(errors, field, value, max_chars)
}

fn bounded_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: String,
    max_chars: usize,
) -> Option<String> {
    if value.is_empty() {
        errors.push(field, "This field may not be blank.");
        return None;
    }
    if value.chars().count() > max_chars {
        errors.push(
            field,
            format!("Ensure this field has no more than {max_chars} characters."),
        );
        return None;
    }
    Some(value)
}

fn status_from_code(errors: &mut ValidationErrors, code: String) -> Option<TodoStatus> {
    match TodoStatus::from_code(&code) {
        Ok(status) => Some(status),
        Err(unknown) => {
            errors.push("status", unknown.to_string());
            None
        }
    }
}
