//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and the unpersisted creation request.
//! - Enforce title validation at construction and before writes.
//!
//! # Invariants
//! - `id` is store-assigned, immutable, and unique across all stored tasks.
//! - `NewTodo` titles are trimmed and non-empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable store-assigned identifier for a persisted task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

/// A persisted task record as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by the store on insert; never reused for another task.
    pub id: TodoId,
    /// Non-empty display text.
    pub title: String,
    /// Completion flag. Serialized as `isChecked` to match the persisted
    /// column and the UI boundary's field naming.
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
}

/// A task that has not been persisted yet.
///
/// The store assigns the id and the completion flag always starts unchecked,
/// so the only caller-provided field is the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    /// Display text; must survive `validate()` before any write.
    pub title: String,
}

impl NewTodo {
    /// Builds a creation request from raw title input.
    ///
    /// The title is trimmed; empty or whitespace-only input is rejected.
    pub fn new(title: impl AsRef<str>) -> Result<Self, TodoValidationError> {
        let request = Self {
            title: title.as_ref().trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks creation invariants without consuming the request.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Validation failure for task creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Title was empty or whitespace-only.
    EmptyTitle,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// Predicate selecting which tasks the list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoFilter {
    /// Every task, checked or not.
    #[default]
    All,
    /// Tasks still to do (`is_checked == false`).
    Active,
    /// Finished tasks (`is_checked == true`).
    Completed,
}

impl TodoFilter {
    /// Returns whether `todo` belongs to the filtered view.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.is_checked,
            Self::Completed => todo.is_checked,
        }
    }
}
