//! Background store worker and async operation handles.
//!
//! # Responsibility
//! - Run every storage operation on one dedicated thread, never on the
//!   caller's thread.
//! - Give callers a future per operation: awaiting it suspends until the
//!   store confirms, dropping it cancels the command.
//!
//! # Invariants
//! - The worker thread is the store's only owner; commands execute strictly
//!   in submission order, so no mutation races another operation.
//! - A command whose reply side is already gone is skipped, not executed.
//! - After shutdown every operation fails with `StoreError::Closed`.

use crate::model::todo::{NewTodo, Todo, TodoId};
use crate::store::todo_store::{StoreError, StoreResult, TodoStore};
use log::{error, info};
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};

const COMMAND_QUEUE_DEPTH: usize = 32;

enum StoreCommand {
    Insert {
        new: NewTodo,
        reply: oneshot::Sender<StoreResult<TodoId>>,
    },
    Delete {
        id: TodoId,
        reply: oneshot::Sender<StoreResult<()>>,
    },
    SetChecked {
        id: TodoId,
        checked: bool,
        reply: oneshot::Sender<StoreResult<()>>,
    },
    ClearChecked {
        reply: oneshot::Sender<StoreResult<Vec<TodoId>>>,
    },
    Get {
        id: TodoId,
        reply: oneshot::Sender<StoreResult<Option<Todo>>>,
    },
    GetAll {
        reply: oneshot::Sender<StoreResult<Vec<Todo>>>,
    },
    Shutdown,
}

/// Cloneable async handle to the store worker.
///
/// Every method submits one command and suspends until the worker replies.
/// The returned future is the operation's handle: dropping it before
/// completion cancels the command.
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreCommand>,
}

impl StoreHandle {
    /// Persists a new unchecked task.
    pub async fn insert(&self, new: NewTodo) -> StoreResult<TodoId> {
        let (reply, rx) = oneshot::channel();
        self.submit(StoreCommand::Insert { new, reply }, rx).await
    }

    /// Removes one task by id.
    pub async fn delete(&self, id: TodoId) -> StoreResult<()> {
        let (reply, rx) = oneshot::channel();
        self.submit(StoreCommand::Delete { id, reply }, rx).await
    }

    /// Persists the completion flag for one task.
    pub async fn set_checked(&self, id: TodoId, checked: bool) -> StoreResult<()> {
        let (reply, rx) = oneshot::channel();
        self.submit(StoreCommand::SetChecked { id, checked, reply }, rx)
            .await
    }

    /// Deletes every checked task atomically, returning the removed ids.
    pub async fn clear_checked(&self) -> StoreResult<Vec<TodoId>> {
        let (reply, rx) = oneshot::channel();
        self.submit(StoreCommand::ClearChecked { reply }, rx).await
    }

    /// Reads one task by id.
    pub async fn get(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let (reply, rx) = oneshot::channel();
        self.submit(StoreCommand::Get { id, reply }, rx).await
    }

    /// Reads all persisted tasks.
    pub async fn get_all(&self) -> StoreResult<Vec<Todo>> {
        let (reply, rx) = oneshot::channel();
        self.submit(StoreCommand::GetAll { reply }, rx).await
    }

    /// Stops the worker. Operations submitted afterwards fail with `Closed`.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(StoreCommand::Shutdown).await;
    }

    async fn submit<T>(
        &self,
        command: StoreCommand,
        rx: oneshot::Receiver<StoreResult<T>>,
    ) -> StoreResult<T> {
        self.tx
            .send(command)
            .await
            .map_err(|_| StoreError::Closed)?;
        rx.await.map_err(|_| StoreError::Closed)?
    }
}

/// Spawns the dedicated storage thread and returns its handle.
///
/// The worker owns `store` for its whole lifetime and exits when it receives
/// a shutdown command or when the last handle is dropped.
pub fn spawn_store_worker<S>(store: S) -> StoreHandle
where
    S: TodoStore + Send + 'static,
{
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);

    std::thread::spawn(move || run_worker(store, rx));

    StoreHandle { tx }
}

fn run_worker<S: TodoStore>(mut store: S, mut rx: mpsc::Receiver<StoreCommand>) {
    info!("event=store_worker module=store status=start");

    while let Some(command) = rx.blocking_recv() {
        if matches!(command, StoreCommand::Shutdown) {
            break;
        }
        execute(&mut store, command);
    }

    info!("event=store_worker module=store status=stop");
}

fn execute<S: TodoStore>(store: &mut S, command: StoreCommand) {
    match command {
        StoreCommand::Insert { new, reply } => run_op("insert", reply, || store.insert(&new)),
        StoreCommand::Delete { id, reply } => run_op("delete", reply, || store.delete(id)),
        StoreCommand::SetChecked { id, checked, reply } => {
            run_op("set_checked", reply, || store.set_checked(id, checked))
        }
        StoreCommand::ClearChecked { reply } => {
            run_op("clear_checked", reply, || store.clear_checked())
        }
        StoreCommand::Get { id, reply } => run_op("get", reply, || store.get(id)),
        StoreCommand::GetAll { reply } => run_op("get_all", reply, || store.get_all()),
        StoreCommand::Shutdown => {}
    }
}

fn run_op<T>(
    op: &'static str,
    reply: oneshot::Sender<StoreResult<T>>,
    run: impl FnOnce() -> StoreResult<T>,
) {
    if reply.is_closed() {
        // The caller dropped its future; treat the command as cancelled.
        info!("event=store_op module=store op={op} status=cancelled");
        return;
    }

    let started_at = Instant::now();
    let result = run();

    match &result {
        Ok(_) => info!(
            "event=store_op module=store op={op} status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_op module=store op={op} status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }

    let _ = reply.send(result);
}
