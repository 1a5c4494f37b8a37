use thiserror::Error;

/// Error types for the `tb` command line
#[derive(Error, Debug)]
pub enum CliError {
    /// The board surfaced a failure for the executed command
    #[error("{message}")]
    Board { message: String },

    /// The requested task is not in the fetched collection
    #[error("Task '{id}' not found")]
    NotFound { id: String },

    /// An update was requested without any field to change
    #[error("No fields to update")]
    NoChanges,

    /// Output could not be encoded as JSON
    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Build a `Board` error from the message a controller surfaced.
    pub fn board(message: Option<&str>) -> Self {
        CliError::Board {
            message: message.unwrap_or("Request failed. Please try again.").to_string(),
        }
    }
}

/// Result type alias for command execution
pub type CliResult<T> = Result<T, CliError>;
