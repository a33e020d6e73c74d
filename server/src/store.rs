//! In-memory record store.
//!
//! # Design
//! `TodoStore` is a cheap, cloneable handle around a map guarded by a tokio
//! `RwLock`. Each method takes the lock once, so every operation is observed
//! atomically and `list` always returns a consistent snapshot. The lock is
//! never held past the end of a method.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::TodoRecord;

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    records: Arc<RwLock<HashMap<String, TodoRecord>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record with the same id.
    pub async fn put(&self, record: TodoRecord) {
        self.records.write().await.insert(record.id.clone(), record);
    }

    pub async fn get(&self, id: &str) -> Option<TodoRecord> {
        self.records.read().await.get(id).cloned()
    }

    /// Snapshot of all records. Order is unspecified.
    pub async fn list(&self) -> Vec<TodoRecord> {
        self.records.read().await.values().cloned().collect()
    }

    /// Remove the record under `id`, returning whether one existed.
    pub async fn delete(&self, id: &str) -> bool {
        self.records.write().await.remove(id).is_some()
    }

    /// Apply `f` to the record under `id` while holding the write lock and
    /// return the merged record, or `None` if there is no such record.
    pub async fn update<F>(&self, id: &str, f: F) -> Option<TodoRecord>
    where
        F: FnOnce(&mut TodoRecord),
    {
        let mut records = self.records.write().await;
        let record = records.get_mut(id)?;
        f(record);
        Some(record.clone())
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Titles and completion flags of the demonstration records.
const DEMO_TODOS: [(&str, bool); 3] = [
    ("Learn axum", false),
    ("Build a REST API", true),
    ("Write unit tests", false),
];

/// Populate `store` with a handful of demonstration records.
pub async fn seed_demo(store: &TodoStore) {
    for (title, completed) in DEMO_TODOS {
        store
            .put(TodoRecord {
                id: Uuid::new_v4().to_string(),
                title: title.to_string(),
                completed,
            })
            .await;
    }
}
