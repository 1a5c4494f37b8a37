//! CLI commands for Taskboard
//!
//! This module contains all subcommand implementations for the tb CLI.

pub mod add;
pub mod delete;
pub mod list;
pub mod stats;
pub mod toggle;
pub mod update;

pub use add::AddCommand;
pub use delete::{DeleteCommand, StdinConfirm};
pub use list::ListCommand;
pub use stats::StatsCommand;
pub use toggle::ToggleCommand;
pub use update::UpdateCommand;

use clap::Subcommand;
use taskboard_client::{Status, TaskTransport};

use crate::error::CliResult;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tasks, optionally filtered and searched
    List(ListCommand),
    /// Create a new task
    Add(AddCommand),
    /// Change fields of an existing task
    Update(UpdateCommand),
    /// Flip a task between pending and completed
    Toggle(ToggleCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Show completion statistics
    Stats(StatsCommand),
}

impl Command {
    /// Execute the command against the given transport.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` when the board surfaced a failure, or
    /// `CliError::NotFound` when the command names an unknown task.
    pub async fn execute<T: TaskTransport + Sync>(&self, transport: &T) -> CliResult<String> {
        match self {
            Command::List(cmd) => cmd.execute(transport).await,
            Command::Add(cmd) => cmd.execute(transport).await,
            Command::Update(cmd) => cmd.execute(transport).await,
            Command::Toggle(cmd) => cmd.execute(transport).await,
            Command::Delete(cmd) => cmd.execute(transport).await,
            Command::Stats(cmd) => cmd.execute(transport).await,
        }
    }
}

/// Parse a status string into a Status enum
pub(crate) fn parse_status(s: &str) -> Result<Status, String> {
    Status::parse(&s.to_lowercase()).ok_or_else(|| {
        format!(
            "invalid status '{}'. Valid values: pending, completed",
            s
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test struct to parse commands
    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_parse_status_valid() {
        assert_eq!(parse_status("pending"), Ok(Status::Pending));
        assert_eq!(parse_status("COMPLETED"), Ok(Status::Completed));
    }

    #[test]
    fn test_parse_status_invalid() {
        let err = parse_status("done").unwrap_err();
        assert!(err.contains("invalid status 'done'"));
    }

    #[test]
    fn test_command_list_parses() {
        let cli = TestCli::try_parse_from(["test", "list", "--filter", "high", "--search", "milk"]);
        assert!(cli.is_ok());
        match cli.unwrap().command {
            Command::List(cmd) => {
                assert_eq!(cmd.filter.as_str(), "high");
                assert_eq!(cmd.search.as_deref(), Some("milk"));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_command_add_parses() {
        let cli = TestCli::try_parse_from(["test", "add", "My task", "-p", "high"]);
        assert!(cli.is_ok());
        match cli.unwrap().command {
            Command::Add(cmd) => {
                assert_eq!(cmd.title, "My task");
                assert_eq!(cmd.priority.as_deref(), Some("high"));
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_command_add_requires_title() {
        assert!(TestCli::try_parse_from(["test", "add"]).is_err());
    }

    #[test]
    fn test_command_update_requires_a_field() {
        let result = TestCli::try_parse_from(["test", "update", "3"]);
        assert!(result.is_err(), "update without fields should be rejected");
    }

    #[test]
    fn test_command_update_with_status() {
        let cli = TestCli::try_parse_from(["test", "update", "3", "--status", "completed"]);
        match cli.unwrap().command {
            Command::Update(cmd) => {
                assert_eq!(cmd.id, "3");
                assert_eq!(cmd.status, Some(Status::Completed));
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_command_update_invalid_status() {
        let result = TestCli::try_parse_from(["test", "update", "3", "--status", "wrong"]);
        match result {
            Err(e) => {
                let err = e.to_string();
                assert!(
                    err.contains("status") || err.contains("wrong"),
                    "Error should mention the status argument, got: {}",
                    err
                );
            }
            Ok(_) => panic!("Expected error for invalid status"),
        }
    }

    #[test]
    fn test_command_delete_force() {
        let cli = TestCli::try_parse_from(["test", "delete", "9", "-f"]);
        match cli.unwrap().command {
            Command::Delete(cmd) => {
                assert_eq!(cmd.id, "9");
                assert!(cmd.force);
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_command_toggle_and_stats_parse() {
        assert!(TestCli::try_parse_from(["test", "toggle", "1"]).is_ok());
        assert!(TestCli::try_parse_from(["test", "stats"]).is_ok());
    }
}
