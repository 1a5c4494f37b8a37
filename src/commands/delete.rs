//! Delete command for removing tasks
//!
//! Implements the `tb delete` command, asking for confirmation on stdin
//! unless `--force` is given.

use std::io::{self, Write};

use clap::Args;
use taskboard_board::{AlwaysConfirm, Confirm, DeleteOutcome, TaskController};
use taskboard_client::{TaskId, TaskTransport};

use crate::error::{CliError, CliResult};

/// Delete a task
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Task ID to delete
    #[arg(required = true)]
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Asks for confirmation on the terminal
///
/// Anything other than `y` or `yes` declines, including unreadable input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        is_yes(&input)
    }
}

/// Check whether a typed answer means yes
fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

impl DeleteCommand {
    /// Execute the delete command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` if fetching or deleting failed.
    pub async fn execute<T: TaskTransport + Sync>(&self, transport: &T) -> CliResult<String> {
        if self.force {
            self.execute_with(transport, AlwaysConfirm).await
        } else {
            self.execute_with(transport, StdinConfirm).await
        }
    }

    /// Execute the delete command with a specific confirmation capability.
    ///
    /// The collection is fetched first so the prompt can name the task.
    pub async fn execute_with<T, C>(&self, transport: &T, confirm: C) -> CliResult<String>
    where
        T: TaskTransport + Sync,
        C: Confirm + Send + Sync + 'static,
    {
        let mut board = TaskController::new(transport, confirm);
        if !board.refresh().await {
            return Err(CliError::board(board.error()));
        }

        let id = TaskId::new(self.id.clone());
        match board.delete(&id).await {
            DeleteOutcome::Deleted => Ok(format!("Deleted task: {}", id)),
            DeleteOutcome::Declined => Ok("Deletion cancelled".to_string()),
            DeleteOutcome::Failed => Err(CliError::board(board.error())),
        }
    }
}
