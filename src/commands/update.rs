//! Update command for patching task fields
//!
//! Implements the `tb update` command. Only the flags given are sent.

use clap::{ArgGroup, Args};
use taskboard_board::{AlwaysConfirm, TaskController};
use taskboard_client::{Status, TaskId, TaskPatch, TaskTransport};

use super::parse_status;
use crate::error::{CliError, CliResult};
use crate::output::format_task;

/// Change fields of an existing task
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["title", "description", "status", "priority"])
))]
pub struct UpdateCommand {
    /// Task ID to update
    #[arg(required = true)]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New status (pending, completed)
    #[arg(short, long, value_parser = parse_status)]
    pub status: Option<Status>,

    /// New priority category
    #[arg(short, long)]
    pub priority: Option<String>,
}

impl UpdateCommand {
    /// Build the patch from the parsed flags.
    fn patch(&self) -> TaskPatch {
        let mut patch = TaskPatch::new();
        if let Some(title) = &self.title {
            patch = patch.with_title(title.clone());
        }
        if let Some(description) = &self.description {
            patch = patch.with_description(description.clone());
        }
        if let Some(status) = self.status {
            patch = patch.with_status(status);
        }
        if let Some(priority) = &self.priority {
            patch = patch.with_priority(priority.as_str());
        }
        patch
    }

    /// Execute the update command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::NoChanges` if no field flag was given, or
    /// `CliError::Board` if fetching failed or the store rejected the patch.
    pub async fn execute<T: TaskTransport + Sync>(&self, transport: &T) -> CliResult<String> {
        let patch = self.patch();
        if !patch.has_updates() {
            return Err(CliError::NoChanges);
        }

        let mut board = TaskController::new(transport, AlwaysConfirm);
        if !board.refresh().await {
            return Err(CliError::board(board.error()));
        }

        let id = TaskId::new(self.id.clone());
        match board.update(&id, patch).await {
            Some(task) => Ok(format!("Updated task: {}\n{}", task.id, format_task(&task))),
            None => Err(CliError::board(board.error())),
        }
    }
}
