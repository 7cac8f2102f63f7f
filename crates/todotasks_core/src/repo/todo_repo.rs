//! Task repository.
//!
//! # Responsibility
//! - Provide the application-level operations controllers consume.
//! - Delegate each call to exactly one store operation.
//!
//! # Invariants
//! - No batching and no transactions across calls; the atomic bulk clear is
//!   itself a single store operation.
//! - The store handle is injected at construction, never reached globally.

use crate::model::todo::{NewTodo, Todo, TodoId};
use crate::store::todo_store::StoreResult;
use crate::store::worker::StoreHandle;

/// Thin pass-through over the store worker handle.
#[derive(Clone)]
pub struct TodoRepository {
    store: StoreHandle,
}

impl TodoRepository {
    /// Creates a repository using the provided store handle.
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Persists a new unchecked task and returns the assigned id.
    pub async fn insert_todo(&self, new: NewTodo) -> StoreResult<TodoId> {
        self.store.insert(new).await
    }

    /// Removes one task by id.
    pub async fn delete_todo(&self, id: TodoId) -> StoreResult<()> {
        self.store.delete(id).await
    }

    /// Persists the completion flag for one task.
    pub async fn set_checked(&self, id: TodoId, checked: bool) -> StoreResult<()> {
        self.store.set_checked(id, checked).await
    }

    /// Deletes every checked task atomically, returning the removed ids.
    pub async fn clear_checked(&self) -> StoreResult<Vec<TodoId>> {
        self.store.clear_checked().await
    }

    /// Reads one task by id.
    pub async fn get_todo(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        self.store.get(id).await
    }

    /// Reads all persisted tasks in implementation-defined order.
    pub async fn fetch_all(&self) -> StoreResult<Vec<Todo>> {
        self.store.get_all().await
    }
}
