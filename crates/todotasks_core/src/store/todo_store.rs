//! Task store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the durable `todo` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths validate input before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `clear_checked` removes all checked rows in one transaction.

use crate::db::{open_db, open_db_in_memory, DbError, DbResult};
use crate::model::todo::{NewTodo, Todo, TodoId, TodoValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const TODO_SELECT_SQL: &str = "SELECT id, title, isChecked FROM todo";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error taxonomy for task persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Creation input failed validation.
    Validation(TodoValidationError),
    /// Storage I/O or schema failure.
    Db(DbError),
    /// A delete/update referenced an id the store does not hold.
    NotFound(TodoId),
    /// A persisted row violated the data model on read.
    InvalidData(String),
    /// The store worker has shut down or the owning view was torn down.
    Closed,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
            Self::Closed => write!(f, "task store is closed"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::Closed => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store interface for task persistence.
///
/// Writes take `&mut self`: the store has exactly one owner and mutations are
/// serialized through it.
pub trait TodoStore {
    /// Persists a new unchecked task and returns the assigned id.
    fn insert(&mut self, new: &NewTodo) -> StoreResult<TodoId>;
    /// Removes the record matching `id`; `NotFound` when absent.
    fn delete(&mut self, id: TodoId) -> StoreResult<()>;
    /// Persists the completion flag for one task; `NotFound` when absent.
    fn set_checked(&mut self, id: TodoId, checked: bool) -> StoreResult<()>;
    /// Deletes every checked task atomically, returning the removed ids.
    fn clear_checked(&mut self) -> StoreResult<Vec<TodoId>>;
    /// Reads one task by id.
    fn get(&self, id: TodoId) -> StoreResult<Option<Todo>>;
    /// Reads all persisted tasks in implementation-defined order.
    fn get_all(&self) -> StoreResult<Vec<Todo>>;
}

/// SQLite-backed task store. Owns its connection.
pub struct SqliteTodoStore {
    conn: Connection,
}

impl SqliteTodoStore {
    /// Wraps an already-bootstrapped connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens a file-backed store, applying migrations.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens an in-memory store, applying migrations.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }
}

impl TodoStore for SqliteTodoStore {
    fn insert(&mut self, new: &NewTodo) -> StoreResult<TodoId> {
        new.validate()?;

        self.conn.execute(
            "INSERT INTO todo (title, isChecked) VALUES (?1, 0);",
            params![new.title.trim()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn delete(&mut self, id: TodoId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM todo WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn set_checked(&mut self, id: TodoId, checked: bool) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE todo SET isChecked = ?1 WHERE id = ?2;",
            params![bool_to_int(checked), id],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    fn clear_checked(&mut self) -> StoreResult<Vec<TodoId>> {
        let tx = self.conn.transaction()?;

        let mut removed = Vec::new();
        {
            let mut stmt = tx.prepare("SELECT id FROM todo WHERE isChecked = 1;")?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                removed.push(row.get::<_, TodoId>(0)?);
            }
        }

        tx.execute("DELETE FROM todo WHERE isChecked = 1;", [])?;
        tx.commit()?;

        Ok(removed)
    }

    fn get(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn get_all(&self) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(TODO_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();

        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }
}

fn parse_todo_row(row: &Row<'_>) -> StoreResult<Todo> {
    let id: TodoId = row.get("id")?;

    let title: String = row.get("title")?;
    if title.trim().is_empty() {
        return Err(StoreError::InvalidData(format!(
            "empty title in todo row id={id}"
        )));
    }

    let is_checked = match row.get::<_, i64>("isChecked")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid isChecked value `{other}` in todo row id={id}"
            )));
        }
    };

    Ok(Todo {
        id,
        title,
        is_checked,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
