//! Domain core for the todo service.
//!
//! # Overview
//! Holds everything the HTTP layer needs that is not HTTP: the record model
//! and its status table, the wire representation mapping, payload
//! validation, and the repository seam with its in-memory implementation.
//! No framework types appear in this crate.
//!
//! # Design
//! - Handlers depend on the `TodoRepository` trait only; `MemoryRepo` is the
//!   bundled backend and any relational store can replace it behind the trait.
//! - Inbound payloads deserialize every field as `Option` so a missing field
//!   becomes a field-level validation error rather than a body rejection.
//! - `TodoStatus` carries an explicit code↔label table instead of a boolean,
//!   keeping the enumeration open to new statuses.

pub mod model;
pub mod repo;
pub mod repr;
pub mod validate;

pub use model::{NewTodo, TodoPatch, TodoRecord, TodoStatus, UnknownStatus};
pub use repo::{MemoryRepo, TodoRepository};
pub use repr::{CreateTodo, TodoRepr, UpdateTodo};
pub use validate::ValidationErrors;
