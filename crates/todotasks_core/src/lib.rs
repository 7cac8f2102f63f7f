//! Core domain logic for the todotasks app.
//! This crate is the single source of truth for task data and its display
//! state; UI layers consume it as a black box.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use controller::{DisplayState, TaskCreationController, TaskListController};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{NewTodo, Todo, TodoFilter, TodoId, TodoValidationError};
pub use repo::todo_repo::TodoRepository;
pub use store::todo_store::{SqliteTodoStore, StoreError, StoreResult, TodoStore};
pub use store::worker::{spawn_store_worker, StoreHandle};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
