//! Repository seam between handlers and storage.
//!
//! # Design
//! Handlers talk to [`TodoRepository`] and nothing else, so the storage
//! engine is swappable. Absence is data (`Option` / `bool`), not an error;
//! the `anyhow::Result` channel exists for backends that can actually fail.
//! [`MemoryRepo`] is the bundled backend: a `tokio::sync::RwLock` around a
//! `BTreeMap` keyed by the record id. Ids increase monotonically and are
//! never reused, which makes map order insertion order.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::model::{NewTodo, TodoPatch, TodoRecord};

/// Persistent store of todo records, atomic at single-record granularity.
/// Concurrent writes to the same id are last-write-wins.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Every stored record, in insertion order.
    async fn list(&self) -> Result<Vec<TodoRecord>>;

    /// Persist a new record: assigns the next id and stamps both dates with
    /// the current date.
    async fn create(&self, input: NewTodo) -> Result<TodoRecord>;

    async fn find(&self, id: i64) -> Result<Option<TodoRecord>>;

    /// Merge the present fields of `patch` onto the record and refresh its
    /// updated date. `None` if no record has this id.
    async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<TodoRecord>>;

    /// Hard-delete a record. `false` if no record has this id.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// In-memory repository backing the service by default.
#[derive(Debug, Default)]
pub struct MemoryRepo {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, TodoRecord>,
}

#[async_trait]
impl TodoRepository for MemoryRepo {
    async fn list(&self) -> Result<Vec<TodoRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.values().cloned().collect())
    }

    async fn create(&self, input: NewTodo) -> Result<TodoRecord> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let today = Utc::now().date_naive();
        let record = TodoRecord {
            id: inner.next_id,
            title: input.title,
            description: input.description,
            status: input.status,
            created_at: today,
            updated_at: today,
        };
        inner.records.insert(record.id, record.clone());
        tracing::debug!(id = record.id, "created todo");
        Ok(record)
    }

    async fn find(&self, id: i64) -> Result<Option<TodoRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(&id).cloned())
    }

    async fn update(&self, id: i64, patch: TodoPatch) -> Result<Option<TodoRecord>> {
        let mut inner = self.inner.write().await;
        let Some(record) = inner.records.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(status) = patch.status {
            record.status = status;
        }
        record.updated_at = Utc::now().date_naive();
        tracing::debug!(id, "updated todo");
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let removed = inner.records.remove(&id).is_some();
        if removed {
            tracing::debug!(id, "deleted todo");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoStatus;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: format!("description for {title}"),
            status: TodoStatus::NotCompleted,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = MemoryRepo::default();
        let first = repo.create(new_todo("first")).await.unwrap();
        let second = repo.create(new_todo("second")).await.unwrap();
        let third = repo.create(new_todo("third")).await.unwrap();
        assert_eq!((first.id, second.id, third.id), (1, 2, 3));
    }

    #[tokio::test]
    async fn create_stamps_both_dates_with_today() {
        let repo = MemoryRepo::default();
        let record = repo.create(new_todo("dated")).await.unwrap();
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.created_at, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let repo = MemoryRepo::default();
        for title in ["a", "b", "c"] {
            repo.create(new_todo(title)).await.unwrap();
        }
        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.title)
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = MemoryRepo::default();
        assert!(repo.find(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_merges_partial_patch() {
        let repo = MemoryRepo::default();
        let created = repo.create(new_todo("keep me")).await.unwrap();
        let patch = TodoPatch {
            status: Some(TodoStatus::Completed),
            ..TodoPatch::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.status, TodoStatus::Completed);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let repo = MemoryRepo::default();
        assert!(repo.update(42, TodoPatch::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_persists_the_merge() {
        let repo = MemoryRepo::default();
        let created = repo.create(new_todo("old title")).await.unwrap();
        let patch = TodoPatch {
            title: Some("new title".to_string()),
            ..TodoPatch::default()
        };
        repo.update(created.id, patch).await.unwrap();
        let found = repo.find(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "new title");
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = MemoryRepo::default();
        let created = repo.create(new_todo("doomed")).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find(created.id).await.unwrap().is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_returns_false() {
        let repo = MemoryRepo::default();
        assert!(!repo.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = MemoryRepo::default();
        let first = repo.create(new_todo("first")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(new_todo("second")).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }
}
