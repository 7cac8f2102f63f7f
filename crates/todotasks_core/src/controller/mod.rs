//! Presentation-facing controllers.
//!
//! # Responsibility
//! - Hold the transient working set the UI renders and drive its display
//!   state transitions.
//! - Commit user intents (add, toggle, delete, clear, filter) through the
//!   repository.

pub mod create_controller;
pub mod list_controller;

pub use create_controller::TaskCreationController;
pub use list_controller::{DisplayState, TaskListController};
