//! Test infrastructure for integration tests
//!
//! Provides seeded in-memory stores and command builder helpers. Each test
//! builds its own store so no state is shared.

use taskboard::commands::{AddCommand, DeleteCommand, ListCommand, UpdateCommand};
use taskboard_board::TaskFilter;
use taskboard_client::{MemoryTransport, Priority, Status, Task, TaskId};

/// Build a task record as the store would hold it.
pub fn task(id: &str, title: &str, status: Status, priority: &str) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: String::new(),
        status,
        priority: Priority::new(priority),
        created_at: None,
    }
}

/// A store holding five tasks, two of them completed.
pub fn seeded_store() -> MemoryTransport {
    MemoryTransport::with_tasks(vec![
        task("1", "Buy Milk", Status::Pending, "low"),
        task("2", "File taxes", Status::Completed, "high"),
        task("3", "Call plumber", Status::Pending, "high"),
        task("4", "Water plants", Status::Completed, "medium"),
        task("5", "Book dentist", Status::Pending, "medium"),
    ])
}

/// Titles in store order, for asserting on store contents.
pub fn store_titles(store: &MemoryTransport) -> Vec<String> {
    store.snapshot().into_iter().map(|t| t.title).collect()
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

/// Create a ListCommand with the given filter and search.
pub fn list_cmd(filter: &str, search: Option<&str>) -> ListCommand {
    ListCommand {
        filter: TaskFilter::parse(filter),
        search: search.map(str::to_string),
        json: false,
    }
}

/// Create an AddCommand with default optional fields filled in.
pub fn add_cmd(title: &str) -> AddCommand {
    AddCommand {
        title: title.to_string(),
        description: None,
        priority: None,
        status: None,
    }
}

/// Create an UpdateCommand that only changes the status.
pub fn update_status_cmd(id: &str, status: Status) -> UpdateCommand {
    UpdateCommand {
        id: id.to_string(),
        title: None,
        description: None,
        status: Some(status),
        priority: None,
    }
}

/// Create a DeleteCommand.
pub fn delete_cmd(id: &str, force: bool) -> DeleteCommand {
    DeleteCommand {
        id: id.to_string(),
        force,
    }
}
