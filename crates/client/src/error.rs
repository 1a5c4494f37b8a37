use thiserror::Error;

/// Transport error types for Taskboard
///
/// Every failed call surfaces as a single kind. The detail carries the
/// response body text when the store sent one, otherwise a default message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The remote store did not answer with a success response
    #[error("Request failed: {detail}")]
    RequestFailed { detail: String },
}

impl ClientError {
    /// Build a `RequestFailed` error from any displayable detail.
    pub fn request_failed(detail: impl Into<String>) -> Self {
        ClientError::RequestFailed {
            detail: detail.into(),
        }
    }

    /// Build a `RequestFailed` error for a non-success HTTP status.
    ///
    /// Uses the body text as the detail when it is non-blank, otherwise
    /// falls back to `HTTP error! status: <code>`.
    pub fn from_status(status: u16, body: &str) -> Self {
        if body.trim().is_empty() {
            Self::request_failed(format!("HTTP error! status: {}", status))
        } else {
            Self::request_failed(body)
        }
    }

    /// The human-readable diagnostic detail.
    pub fn detail(&self) -> &str {
        match self {
            ClientError::RequestFailed { detail } => detail,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::request_failed(err.to_string())
    }
}

/// Result type alias for transport operations
pub type ClientResult<T> = Result<T, ClientError>;
