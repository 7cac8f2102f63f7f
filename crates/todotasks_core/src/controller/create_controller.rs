//! Task creation controller.
//!
//! # Responsibility
//! - Validate new-task input and commit it through the repository.
//!
//! # Invariants
//! - New tasks always start unchecked.
//! - Nothing reaches the store when validation fails.

use crate::model::todo::{NewTodo, TodoId};
use crate::repo::todo_repo::TodoRepository;
use crate::store::todo_store::StoreResult;

/// Accepts new task input for the add-task view.
pub struct TaskCreationController {
    repo: TodoRepository,
}

impl TaskCreationController {
    /// Creates a controller using the provided repository.
    pub fn new(repo: TodoRepository) -> Self {
        Self { repo }
    }

    /// Validates `title`, persists a new unchecked task, and returns the
    /// store-assigned id.
    ///
    /// A successful return is the signal to navigate back to the list view,
    /// which re-fetches to display the new item.
    pub async fn create_task(&self, title: &str) -> StoreResult<TodoId> {
        let new = NewTodo::new(title)?;
        self.repo.insert_todo(new).await
    }
}
