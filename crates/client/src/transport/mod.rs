//! Transport implementations for the task collection resource
//!
//! `TaskTransport` is the seam between the collection controller and the
//! remote store. `HttpTransport` speaks to a REST record store over HTTP and
//! `MemoryTransport` keeps records in process.

mod http;
mod memory;

pub use http::HttpTransport;
pub use memory::MemoryTransport;

use std::future::Future;

use crate::error::ClientResult;
use crate::models::{NewTask, Task, TaskId, TaskPatch};

/// The four logical operations a transport performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Returns a short lowercase name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CRUD access to a remote task collection
///
/// Each call makes a single attempt. Any non-success outcome is reported as
/// `ClientError::RequestFailed`; callers decide what to do with it.
pub trait TaskTransport {
    /// Retrieve the full current collection, in store order.
    fn list(&self) -> impl Future<Output = ClientResult<Vec<Task>>> + Send;

    /// Submit a new record and return the store's full version of it.
    fn create(&self, task: &NewTask) -> impl Future<Output = ClientResult<Task>> + Send;

    /// Submit a partial patch and return the store's full updated record.
    fn update(
        &self,
        id: &TaskId,
        patch: &TaskPatch,
    ) -> impl Future<Output = ClientResult<Task>> + Send;

    /// Request removal of a record.
    fn delete(&self, id: &TaskId) -> impl Future<Output = ClientResult<bool>> + Send;
}

/// Shared references forward to the underlying transport, so several views
/// can fetch through one client.
impl<T: TaskTransport + Sync> TaskTransport for &T {
    fn list(&self) -> impl Future<Output = ClientResult<Vec<Task>>> + Send {
        (**self).list()
    }

    fn create(&self, task: &NewTask) -> impl Future<Output = ClientResult<Task>> + Send {
        (**self).create(task)
    }

    fn update(
        &self,
        id: &TaskId,
        patch: &TaskPatch,
    ) -> impl Future<Output = ClientResult<Task>> + Send {
        (**self).update(id, patch)
    }

    fn delete(&self, id: &TaskId) -> impl Future<Output = ClientResult<bool>> + Send {
        (**self).delete(id)
    }
}
