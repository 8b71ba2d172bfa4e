//! Wire representations of todo records.
//!
//! # Design
//! Outbound and inbound shapes are deliberately asymmetric: responses carry
//! the status *label* and both ISO calendar dates, while requests carry the
//! one-letter status *code* and no dates. Inbound fields all deserialize as
//! `Option` so that an absent required field surfaces as a field-level
//! validation error (HTTP 400 with a message), never as a body rejection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::TodoRecord;

/// A todo record as rendered in every success response body.
///
/// `timestamp_creation` and `timestamp_updated` serialize as `YYYY-MM-DD`;
/// `status` is the human-readable label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRepr {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub timestamp_creation: NaiveDate,
    pub timestamp_updated: NaiveDate,
    pub status: String,
}

impl From<&TodoRecord> for TodoRepr {
    fn from(record: &TodoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
            timestamp_creation: record.created_at,
            timestamp_updated: record.updated_at,
            status: record.status.label().to_string(),
        }
    }
}

/// Inbound payload for creating a todo.
///
/// `status` is the one-letter wire code; when omitted the record defaults to
/// not completed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Inbound payload for a partial update. Omitted fields remain unchanged;
/// present fields obey the same rules as on create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
