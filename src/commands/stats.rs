//! Stats command for completion statistics
//!
//! Implements the `tb stats` command. The statistics panel fetches its own
//! snapshot of the collection.

use clap::Args;
use taskboard_board::StatsPanel;
use taskboard_client::TaskTransport;

use crate::error::{CliError, CliResult};
use crate::output::format_stats;

/// Show completion statistics
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    /// Execute the stats command.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Board` if the collection could not be fetched.
    pub async fn execute<T: TaskTransport + Sync>(&self, transport: &T) -> CliResult<String> {
        let mut panel = StatsPanel::new(transport);
        if !panel.refresh().await {
            return Err(CliError::board(panel.error()));
        }

        let stats = panel.stats();
        if self.json {
            Ok(serde_json::to_string_pretty(&stats)?)
        } else {
            Ok(format_stats(&stats))
        }
    }
}
