//! Task collection controller
//!
//! Owns the board state and mediates every mutation through a
//! `TaskTransport`.

use chrono::Utc;
use taskboard_client::{ClientError, NewTask, Operation, Task, TaskId, TaskPatch, TaskTransport};
use tracing::{debug, error, warn};

use crate::confirm::Confirm;
use crate::state::BoardState;
use crate::views::TaskFilter;

/// User-facing message surfaced when an operation fails
pub fn failure_message(op: Operation) -> &'static str {
    match op {
        Operation::List => "Failed to fetch tasks. Please try again.",
        Operation::Create => "Failed to create task. Please try again.",
        Operation::Update => "Failed to update task. Please try again.",
        Operation::Delete => "Failed to delete task. Please try again.",
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The store removed the task and it left the snapshot
    Deleted,
    /// The user declined; no request was made
    Declined,
    /// The request failed; the snapshot is unchanged and an error is surfaced
    Failed,
}

/// Controller for the client-side task collection
///
/// Updates are pessimistic: a mutation never shows up in `tasks` until the
/// store has confirmed it, and the stored record is always the one the
/// store returned, not the locally submitted payload.
///
/// No operation returns an error. A failed call leaves `tasks` untouched,
/// logs the transport detail, and surfaces one message that replaces any
/// earlier one.
pub struct TaskController<T> {
    transport: T,
    confirm: Box<dyn Confirm + Send + Sync>,
    state: BoardState,
}

impl<T: TaskTransport> TaskController<T> {
    /// Create a controller with an empty snapshot.
    ///
    /// # Arguments
    ///
    /// * `transport` - Where every fetch and mutation is sent
    /// * `confirm` - Asked before each delete
    pub fn new(transport: T, confirm: impl Confirm + Send + Sync + 'static) -> Self {
        Self {
            transport,
            confirm: Box::new(confirm),
            state: BoardState::new(),
        }
    }

    /// The current snapshot
    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    /// Look up a task in the current snapshot
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.state.find(id)
    }

    /// The surfaced error message, if any
    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Dismiss the surfaced error
    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.state.set_filter(filter);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.set_search(search);
    }

    /// Tasks passing the active filter and search
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        self.state.visible()
    }

    /// Replace the snapshot with the store's current collection.
    ///
    /// Returns `true` on success. On failure the snapshot is left as it was.
    pub async fn refresh(&mut self) -> bool {
        match self.transport.list().await {
            Ok(tasks) => {
                debug!("Fetched {} tasks", tasks.len());
                self.state.replace_all(tasks);
                true
            }
            Err(e) => {
                self.surface(Operation::List, &e);
                false
            }
        }
    }

    /// Create a task and prepend the store's record to the snapshot.
    ///
    /// The payload's creation time is stamped here, when the call is issued.
    pub async fn create(&mut self, task: NewTask) -> Option<Task> {
        let payload = task.stamped(Utc::now());
        match self.transport.create(&payload).await {
            Ok(created) => {
                debug!("Created task {}", created.id);
                self.state.prepend(created.clone());
                Some(created)
            }
            Err(e) => {
                self.surface(Operation::Create, &e);
                None
            }
        }
    }

    /// Patch a task and swap the store's record into its position.
    pub async fn update(&mut self, id: &TaskId, patch: TaskPatch) -> Option<Task> {
        match self.transport.update(id, &patch).await {
            Ok(updated) => {
                debug!("Updated task {}", id);
                self.state.replace_one(id, updated.clone());
                Some(updated)
            }
            Err(e) => {
                self.surface(Operation::Update, &e);
                None
            }
        }
    }

    /// Delete a task after asking for confirmation.
    ///
    /// A declined confirmation makes no request and changes nothing. The task
    /// leaves the snapshot only when the store reports it removed.
    pub async fn delete(&mut self, id: &TaskId) -> DeleteOutcome {
        let prompt = match self.state.find(id) {
            Some(task) => format!("Delete task '{}'?", task.title),
            None => format!("Delete task '{}'?", id),
        };
        if !self.confirm.confirm(&prompt) {
            debug!("Deletion of task {} declined", id);
            return DeleteOutcome::Declined;
        }

        match self.transport.delete(id).await {
            Ok(true) => {
                debug!("Deleted task {}", id);
                self.state.remove_one(id);
                DeleteOutcome::Deleted
            }
            Ok(false) => {
                let err = ClientError::request_failed(format!("Store did not delete task {}", id));
                self.surface(Operation::Delete, &err);
                DeleteOutcome::Failed
            }
            Err(e) => {
                self.surface(Operation::Delete, &e);
                DeleteOutcome::Failed
            }
        }
    }

    /// Flip a task between pending and completed.
    ///
    /// An id missing from the snapshot means the caller is working from stale
    /// state; nothing is sent and no error is surfaced.
    pub async fn toggle_status(&mut self, id: &TaskId) -> Option<Task> {
        let Some(task) = self.state.find(id) else {
            warn!("Toggle requested for task {} not in snapshot", id);
            return None;
        };
        let patch = TaskPatch::new().with_status(task.status.toggled());
        self.update(id, patch).await
    }

    fn surface(&mut self, op: Operation, err: &ClientError) {
        error!("Error during task {}: {}", op, err.detail());
        self.state.set_error(failure_message(op));
    }
}
