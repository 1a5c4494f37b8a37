//! List command for displaying tasks
//!
//! Implements the `tb list` command: fetches the collection, then applies
//! the filter selector and search text.

use clap::Args;
use taskboard_board::{AlwaysConfirm, TaskController, TaskFilter};
use taskboard_client::{Task, TaskTransport};

use crate::error::{CliError, CliResult};
use crate::output::format_task_table;

/// List tasks with an optional filter and search
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Filter selector: "all", a status, or a priority
    #[arg(short, long, value_parser = parse_filter, default_value = "all")]
    pub filter: TaskFilter,

    /// Search text in title and description (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print the tasks as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Parse a filter selector; any value other than "all" is a status or priority
fn parse_filter(s: &str) -> Result<TaskFilter, String> {
    if s.trim().is_empty() {
        return Err("filter cannot be empty".to_string());
    }
    Ok(TaskFilter::parse(s))
}

impl ListCommand {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` if the collection could not be fetched.
    pub async fn execute<T: TaskTransport + Sync>(&self, transport: &T) -> CliResult<String> {
        let mut board = TaskController::new(transport, AlwaysConfirm);
        if !board.refresh().await {
            return Err(CliError::board(board.error()));
        }

        board.set_filter(self.filter.clone());
        board.set_search(self.search.clone().unwrap_or_default());

        let visible: Vec<&Task> = board.visible().collect();
        if self.json {
            Ok(serde_json::to_string_pretty(&visible)?)
        } else {
            Ok(format_task_table(&visible))
        }
    }
}
