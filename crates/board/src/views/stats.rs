//! Aggregate statistics over a task collection

use serde::Serialize;
use taskboard_client::{Operation, Status, Task, TaskTransport};
use tracing::error;

use crate::controller::failure_message;

/// Completion counts for a set of tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage of completed tasks, rounded to the nearest integer
    pub completion_rate: u32,
}

impl TaskStats {
    /// Compute statistics in a single pass over `tasks`.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks
            .iter()
            .filter(|t| t.status == Status::Completed)
            .count();

        let completion_rate = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }
}

/// Statistics panel with its own snapshot of the collection
///
/// The panel fetches independently of any `TaskController`, so the two can
/// disagree until both have refreshed.
pub struct StatsPanel<T> {
    transport: T,
    tasks: Vec<Task>,
    error: Option<String>,
}

impl<T: TaskTransport> StatsPanel<T> {
    /// Create a panel with an empty snapshot
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            tasks: Vec::new(),
            error: None,
        }
    }

    /// Fetch a fresh snapshot.
    ///
    /// On failure the previous snapshot is kept and an error is surfaced.
    /// Returns `true` when the fetch succeeded.
    pub async fn refresh(&mut self) -> bool {
        match self.transport.list().await {
            Ok(tasks) => {
                self.tasks = tasks;
                true
            }
            Err(e) => {
                error!("Error fetching task statistics: {}", e.detail());
                self.error = Some(failure_message(Operation::List).to_string());
                false
            }
        }
    }

    /// Statistics over the panel's current snapshot
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// The surfaced error, if the last failing fetch has not been dismissed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Dismiss the surfaced error
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
