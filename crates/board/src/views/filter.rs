//! Filtered and searched view over the task collection
//!
//! Pure functions: nothing here is cached, the view is rebuilt from the
//! current snapshot every time it is asked for.

use taskboard_client::Task;

/// Selector keyword that matches every task
pub const FILTER_ALL: &str = "all";

/// Filter selector applied to the task list
///
/// `Matching(v)` keeps tasks whose status or priority equals `v`, so a single
/// selector covers both status values and priority categories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Matching(String),
}

impl TaskFilter {
    /// Parse a selector; the keyword `all` selects everything.
    pub fn parse(value: &str) -> Self {
        if value == FILTER_ALL {
            TaskFilter::All
        } else {
            TaskFilter::Matching(value.to_string())
        }
    }

    /// Returns the selector as typed by the user
    pub fn as_str(&self) -> &str {
        match self {
            TaskFilter::All => FILTER_ALL,
            TaskFilter::Matching(value) => value,
        }
    }

    /// Check whether a task passes this selector
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Matching(value) => {
                task.status.as_str() == value || task.priority.as_str() == value
            }
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-insensitive substring match on title or description.
///
/// `needle` must already be lowercased.
fn matches_search(task: &Task, needle: &str) -> bool {
    needle.is_empty()
        || task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
}

/// Lazily yield the tasks that pass both the selector and the search text.
///
/// An empty search string matches everything. Order follows `tasks`.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    filter: &'a TaskFilter,
    search: &str,
) -> impl Iterator<Item = &'a Task> + use<'a> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .filter(move |task| filter.matches(task) && matches_search(task, &needle))
}
