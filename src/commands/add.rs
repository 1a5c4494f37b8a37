//! Add command for creating new tasks
//!
//! Implements the `tb add` command.

use clap::Args;
use taskboard_board::{AlwaysConfirm, TaskController};
use taskboard_client::{NewTask, Status, TaskTransport};

use super::parse_status;
use crate::error::{CliError, CliResult};
use crate::output::format_task;

/// Create a new task
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Title of the task
    #[arg(required = true)]
    pub title: String,

    /// Detailed description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Priority category (defaults to medium)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Initial status (pending, completed)
    #[arg(short, long, value_parser = parse_status)]
    pub status: Option<Status>,
}

impl AddCommand {
    /// Build the create payload from the parsed flags.
    fn payload(&self) -> NewTask {
        let mut task = NewTask::new(self.title.clone());
        if let Some(description) = &self.description {
            task = task.with_description(description.clone());
        }
        if let Some(priority) = &self.priority {
            task = task.with_priority(priority.as_str());
        }
        if let Some(status) = self.status {
            task = task.with_status(status);
        }
        task
    }

    /// Execute the add command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` if the store rejected the task.
    pub async fn execute<T: TaskTransport + Sync>(&self, transport: &T) -> CliResult<String> {
        let mut board = TaskController::new(transport, AlwaysConfirm);
        match board.create(self.payload()).await {
            Some(task) => Ok(format!("Created task: {}\n{}", task.id, format_task(&task))),
            None => Err(CliError::board(board.error())),
        }
    }
}
