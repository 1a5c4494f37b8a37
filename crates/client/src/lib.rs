//! Transport client for Taskboard
//!
//! Provides the task record models, the single-kind transport error, and
//! the `TaskTransport` seam with HTTP and in-memory implementations.

pub mod error;
pub mod models;
pub mod transport;

pub use error::{ClientError, ClientResult};
pub use models::{DEFAULT_PRIORITY, NewTask, Priority, Status, Task, TaskId, TaskPatch};
pub use transport::{HttpTransport, MemoryTransport, Operation, TaskTransport};

/// Base URL of the record store when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_constant() {
        assert_eq!(DEFAULT_API_URL, "http://localhost:3001");
    }

    #[test]
    fn test_memory_transport_is_send_sync() {
        static_assertions::assert_impl_all!(MemoryTransport: Send, Sync);
    }
}
