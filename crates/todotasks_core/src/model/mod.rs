//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its creation/validation rules.
//! - Define the filter predicates applied by the presentation layer.
//!
//! # Invariants
//! - A persisted task's `id` is assigned by the store and never reused.
//! - Titles are non-empty after trimming; validation runs before any write.

pub mod todo;
