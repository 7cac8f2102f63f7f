//! Task list presentation controller.
//!
//! # Responsibility
//! - Own the working set the list view renders.
//! - Apply filter predicates and drive Empty/Populated transitions.
//!
//! # Invariants
//! - The working set is a disposable snapshot; every filter action computes
//!   from a fresh store read, never from a previously filtered subset.
//! - No working-set mutation happens before the store confirms the
//!   corresponding write.
//! - A closed controller refuses further operations and never changes state.

use crate::model::todo::{Todo, TodoFilter, TodoId};
use crate::repo::todo_repo::TodoRepository;
use crate::store::todo_store::{StoreError, StoreResult};

/// Observable display state of the task list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// No tasks match the current view.
    Empty,
    /// One or more tasks are shown.
    Populated,
}

/// Holds the in-memory working set and its display state.
pub struct TaskListController {
    repo: TodoRepository,
    working_set: Vec<Todo>,
    filter: TodoFilter,
    state: DisplayState,
    closed: bool,
}

impl TaskListController {
    /// Creates a controller with an empty working set and the `All` filter.
    ///
    /// The view starts Empty; call [`load`](Self::load) to populate it.
    pub fn new(repo: TodoRepository) -> Self {
        Self {
            repo,
            working_set: Vec::new(),
            filter: TodoFilter::default(),
            state: DisplayState::Empty,
            closed: false,
        }
    }

    /// Fetches all tasks and rebuilds the working set under the current
    /// filter.
    ///
    /// Suspends until the store replies. On failure the prior working set and
    /// state are left unchanged so the view can surface a retry instead of an
    /// indefinite loading state.
    pub async fn load(&mut self) -> StoreResult<DisplayState> {
        let filter = self.filter;
        self.refetch(filter).await
    }

    /// Selects a filter (All / Active / Completed) and re-reads the store.
    ///
    /// The predicate is always applied to the fresh read, so sequential
    /// filter actions cannot compound staleness.
    pub async fn select_filter(&mut self, filter: TodoFilter) -> StoreResult<DisplayState> {
        let state = self.refetch(filter).await?;
        self.filter = filter;
        Ok(state)
    }

    /// Deletes every checked task, then removes exactly the confirmed ids
    /// from the working set in place.
    ///
    /// No-op while the working set is empty.
    pub async fn clear_checked(&mut self) -> StoreResult<DisplayState> {
        self.ensure_active()?;
        if self.working_set.is_empty() {
            return Ok(self.state);
        }

        let removed = self.repo.clear_checked().await?;
        self.working_set.retain(|todo| !removed.contains(&todo.id));
        Ok(self.transition())
    }

    /// Persists the completion flag for one task, then mirrors it into the
    /// working set.
    pub async fn set_checked(&mut self, id: TodoId, checked: bool) -> StoreResult<()> {
        self.ensure_active()?;
        self.repo.set_checked(id, checked).await?;

        if let Some(todo) = self.working_set.iter_mut().find(|todo| todo.id == id) {
            todo.is_checked = checked;
        }
        Ok(())
    }

    /// Deletes one task, removing it from the working set after confirmation.
    pub async fn delete(&mut self, id: TodoId) -> StoreResult<DisplayState> {
        self.ensure_active()?;
        self.repo.delete_todo(id).await?;
        self.working_set.retain(|todo| todo.id != id);
        Ok(self.transition())
    }

    /// The current working set, in the order the store returned it.
    pub fn tasks(&self) -> &[Todo] {
        &self.working_set
    }

    /// The filter applied to the current working set.
    pub fn filter(&self) -> TodoFilter {
        self.filter
    }

    /// The current display state.
    pub fn display_state(&self) -> DisplayState {
        self.state
    }

    /// Tears the controller down when the owning view goes away.
    ///
    /// Guards against in-flight results mutating a disposed view: every
    /// operation on a closed controller fails with `Closed` up front.
    pub fn close(&mut self) {
        self.closed = true;
    }

    async fn refetch(&mut self, filter: TodoFilter) -> StoreResult<DisplayState> {
        self.ensure_active()?;
        let all = self.repo.fetch_all().await?;

        self.working_set = all.into_iter().filter(|t| filter.matches(t)).collect();
        Ok(self.transition())
    }

    fn transition(&mut self) -> DisplayState {
        self.state = if self.working_set.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Populated
        };
        self.state
    }

    fn ensure_active(&self) -> StoreResult<()> {
        if self.closed {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}
