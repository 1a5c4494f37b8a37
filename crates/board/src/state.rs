//! Owned client-side state of the task board.

use taskboard_client::{Task, TaskId};

use crate::views::{TaskFilter, filter_tasks};

/// Everything the board holds between operations
///
/// `tasks` is the snapshot from the last successful fetch or mutation. The
/// filter and search selectors are presentation-only and never change
/// `tasks`; they are applied by `visible`.
///
/// The snapshot is only ever replaced as a whole, never edited in place.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    tasks: Vec<Task>,
    error: Option<String>,
    filter: TaskFilter,
    search: String,
}

impl BoardState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task in the current snapshot
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// The surfaced error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Tasks passing the active filter and search
    pub fn visible(&self) -> impl Iterator<Item = &Task> {
        filter_tasks(&self.tasks, &self.filter, &self.search)
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub(crate) fn prepend(&mut self, task: Task) {
        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.push(task);
        next.extend(self.tasks.iter().cloned());
        self.tasks = next;
    }

    pub(crate) fn replace_one(&mut self, id: &TaskId, task: Task) {
        self.tasks = self
            .tasks
            .iter()
            .map(|t| if &t.id == id { task.clone() } else { t.clone() })
            .collect();
    }

    pub(crate) fn remove_one(&mut self, id: &TaskId) {
        self.tasks = self.tasks.iter().filter(|t| &t.id != id).cloned().collect();
    }
}
