//! Record model and status table.
//!
//! # Design
//! `TodoStatus` is stored as an enum and exchanged as a one-letter wire code
//! (`"F"`/`"T"`), rendered to callers as a human-readable label. The
//! code↔label pairs live in one table (`ALL` plus the two match arms), so a
//! future status such as "ongoing" is a new variant and two match arms —
//! existing codes never change meaning.

use chrono::NaiveDate;
use thiserror::Error;

/// Upper bound on `title`, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Upper bound on `description`, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Completion state of a todo record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoStatus {
    #[default]
    NotCompleted,
    Completed,
}

/// A status wire code that is not in the table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a valid choice.")]
pub struct UnknownStatus(pub String);

impl TodoStatus {
    /// Every known status, in table order.
    pub const ALL: [TodoStatus; 2] = [TodoStatus::NotCompleted, TodoStatus::Completed];

    /// One-letter code used in inbound payloads.
    pub fn code(self) -> &'static str {
        match self {
            TodoStatus::NotCompleted => "F",
            TodoStatus::Completed => "T",
        }
    }

    /// Human-readable label used in outbound representations.
    pub fn label(self) -> &'static str {
        match self {
            TodoStatus::NotCompleted => "Not completed",
            TodoStatus::Completed => "Completed",
        }
    }

    /// Look a status up by its wire code.
    pub fn from_code(code: &str) -> Result<Self, UnknownStatus> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.code() == code)
            .ok_or_else(|| UnknownStatus(code.to_string()))
    }
}

/// A persisted todo record.
///
/// `id` is store-assigned and immutable. `updated_at` is refreshed on every
/// successful mutation and never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Validated input for creating a record. Produced by
/// [`CreateTodo::validate`](crate::repr::CreateTodo); `status` has already
/// been defaulted when it was absent from the payload.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
}

/// Validated input for a partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
}
