//! Toggle command for flipping task completion
//!
//! Implements the `tb toggle` command.

use clap::Args;
use taskboard_board::{AlwaysConfirm, TaskController};
use taskboard_client::{TaskId, TaskTransport};

use crate::error::{CliError, CliResult};
use crate::output::format_task;

/// Flip a task between pending and completed
#[derive(Debug, Args)]
pub struct ToggleCommand {
    /// Task ID to toggle
    #[arg(required = true)]
    pub id: String,
}

impl ToggleCommand {
    /// Execute the toggle command.
    ///
    /// Fetches the collection first so the current status is known.
    ///
    /// # Errors
    ///
    /// Returns `CliError::NotFound` if the task is not in the collection, or
    /// `CliError::Board` if fetching or updating failed.
    pub async fn execute<T: TaskTransport + Sync>(&self, transport: &T) -> CliResult<String> {
        let mut board = TaskController::new(transport, AlwaysConfirm);
        if !board.refresh().await {
            return Err(CliError::board(board.error()));
        }

        let id = TaskId::new(self.id.clone());
        if board.find(&id).is_none() {
            return Err(CliError::NotFound {
                id: self.id.clone(),
            });
        }

        match board.toggle_status(&id).await {
            Some(task) => Ok(format!(
                "Task {} is now {}\n{}",
                task.id,
                task.status,
                format_task(&task)
            )),
            None => Err(CliError::board(board.error())),
        }
    }
}
