//! In-process record store
//!
//! Behaves like the mock REST store: assigns numeric ids, appends new
//! records, merges patches. Failures can be queued per operation, and every
//! call is counted so callers can assert which requests were issued.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::{Operation, TaskTransport};
use crate::error::{ClientError, ClientResult};
use crate::models::{NewTask, Task, TaskId, TaskPatch};

#[derive(Debug, Default)]
struct MemoryState {
    tasks: Vec<Task>,
    next_id: u64,
    calls: HashMap<Operation, usize>,
    pending_failures: HashMap<Operation, Vec<String>>,
}

impl MemoryState {
    /// Count the call and pop a queued failure for it, if any.
    fn begin(&mut self, op: Operation) -> ClientResult<()> {
        *self.calls.entry(op).or_insert(0) += 1;
        match self.pending_failures.get_mut(&op) {
            Some(queue) if !queue.is_empty() => {
                let detail = queue.remove(0);
                debug!("Injected {} failure: {}", op, detail);
                Err(ClientError::request_failed(detail))
            }
            _ => Ok(()),
        }
    }

    fn allocate_id(&mut self) -> TaskId {
        loop {
            self.next_id += 1;
            let candidate = TaskId::new(self.next_id.to_string());
            if !self.tasks.iter().any(|t| t.id == candidate) {
                return candidate;
            }
        }
    }
}

/// Transport backed by an in-memory collection
#[derive(Debug, Default)]
pub struct MemoryTransport {
    state: Mutex<MemoryState>,
}

impl MemoryTransport {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing records, kept in the given order
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let transport = Self::new();
        transport.lock().tasks = tasks;
        transport
    }

    /// Make the next call of `op` fail with the given detail.
    ///
    /// Multiple queued failures are consumed in order, one per call.
    pub fn fail_next(&self, op: Operation, detail: impl Into<String>) {
        self.lock()
            .pending_failures
            .entry(op)
            .or_default()
            .push(detail.into());
    }

    /// Number of times `op` has been called, including failed calls
    pub fn calls(&self, op: Operation) -> usize {
        self.lock().calls.get(&op).copied().unwrap_or(0)
    }

    /// Total number of calls across all operations
    pub fn total_calls(&self) -> usize {
        self.lock().calls.values().sum()
    }

    /// Copy of the stored records, in store order
    pub fn snapshot(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // A panic while holding the lock leaves plain data behind, still usable
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TaskTransport for MemoryTransport {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let mut state = self.lock();
        state.begin(Operation::List)?;
        Ok(state.tasks.clone())
    }

    async fn create(&self, task: &NewTask) -> ClientResult<Task> {
        let mut state = self.lock();
        state.begin(Operation::Create)?;

        let stored = Task {
            id: state.allocate_id(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority.clone(),
            created_at: task.created_at,
        };
        state.tasks.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> ClientResult<Task> {
        let mut state = self.lock();
        state.begin(Operation::Update)?;

        let task = state
            .tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| ClientError::from_status(404, ""))?;
        patch.apply_to(task);
        Ok(task.clone())
    }

    async fn delete(&self, id: &TaskId) -> ClientResult<bool> {
        let mut state = self.lock();
        state.begin(Operation::Delete)?;

        let before = state.tasks.len();
        state.tasks.retain(|t| &t.id != id);
        if state.tasks.len() == before {
            return Err(ClientError::from_status(404, ""));
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryTransport::new();
        let a = store.create(&NewTask::new("A")).await.unwrap();
        let b = store.create(&NewTask::new("B")).await.unwrap();
        assert_eq!(a.id, TaskId::new("1"));
        assert_eq!(b.id, TaskId::new("2"));
        assert_eq!(store.snapshot().len(), 2);
    }

    #[tokio::test]
    async fn test_create_skips_ids_already_seeded() {
        let seeded = Task {
            id: TaskId::new("1"),
            title: "Seed".to_string(),
            description: String::new(),
            status: Status::Pending,
            priority: Default::default(),
            created_at: None,
        };
        let store = MemoryTransport::with_tasks(vec![seeded]);
        let created = store.create(&NewTask::new("New")).await.unwrap();
        assert_eq!(created.id, TaskId::new("2"));
    }

    #[tokio::test]
    async fn test_fail_next_is_consumed_once() {
        let store = MemoryTransport::new();
        store.fail_next(Operation::List, "store down");

        let first = store.list().await;
        assert_eq!(first, Err(ClientError::request_failed("store down")));

        let second = store.list().await;
        assert!(second.is_ok());
        assert_eq!(store.calls(Operation::List), 2);
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let store = MemoryTransport::new();
        let created = store
            .create(&NewTask::new("Write report").with_description("Q3"))
            .await
            .unwrap();

        let updated = store
            .update(&created.id, &TaskPatch::new().with_status(Status::Completed))
            .await
            .unwrap();
        assert_eq!(updated.status, Status::Completed);
        assert_eq!(updated.description, "Q3");
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let store = MemoryTransport::new();
        let result = store
            .update(&TaskId::new("missing"), &TaskPatch::new().with_title("x"))
            .await;
        assert_eq!(
            result,
            Err(ClientError::request_failed("HTTP error! status: 404"))
        );
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryTransport::new();
        let created = store.create(&NewTask::new("Gone soon")).await.unwrap();
        assert_eq!(store.delete(&created.id).await, Ok(true));
        assert!(store.snapshot().is_empty());
        assert!(store.delete(&created.id).await.is_err());
    }

    #[tokio::test]
    async fn test_total_calls_counts_every_operation() {
        let store = MemoryTransport::new();
        let _ = store.list().await;
        let _ = store.create(&NewTask::new("A")).await;
        let _ = store.delete(&TaskId::new("nope")).await;
        assert_eq!(store.total_calls(), 3);
    }
}
