//! Task store: durable persistence and its background worker.
//!
//! # Responsibility
//! - Define the store contract and its SQLite implementation.
//! - Run all storage I/O on a dedicated thread behind async handles.
//!
//! # Invariants
//! - The store is the sole source of truth for task records.
//! - Writes are serialized through a single owner (single-writer discipline).

pub mod todo_store;
pub mod worker;
