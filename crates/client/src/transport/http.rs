//! HTTP transport for a REST record store
//!
//! Maps the four logical operations onto `GET/POST/PATCH/DELETE` against
//! `<base_url>/tasks`, using reqwest with JSON bodies.

use reqwest::{Client, Response};
use tracing::{debug, trace};

use super::TaskTransport;
use crate::error::{ClientError, ClientResult};
use crate::models::{NewTask, Task, TaskId, TaskPatch};

/// Path of the task collection relative to the base URL
const TASKS_PATH: &str = "tasks";

/// Transport talking to a REST record store over HTTP
///
/// No retries and no timeouts are configured; each operation is a single
/// request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the store at `base_url`.
    ///
    /// Trailing slashes are trimmed so paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a transport reusing an existing reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, TASKS_PATH)
    }

    fn item_url(&self, id: &TaskId) -> String {
        format!("{}/{}/{}", self.base_url, TASKS_PATH, id.as_str())
    }
}

/// Pass success responses through, turn anything else into `RequestFailed`.
async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // The body is only diagnostic; an unreadable one falls back to the default message
    let body = response.text().await.unwrap_or_default();
    debug!("Request failed with status {}: {}", status, body);
    Err(ClientError::from_status(status.as_u16(), &body))
}

impl TaskTransport for HttpTransport {
    async fn list(&self) -> ClientResult<Vec<Task>> {
        let url = self.collection_url();
        debug!("GET {}", url);

        let response = ensure_success(self.client.get(&url).send().await?).await?;
        let tasks: Vec<Task> = response.json().await?;
        trace!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn create(&self, task: &NewTask) -> ClientResult<Task> {
        let url = self.collection_url();
        debug!("POST {} title: {}", url, task.title);
        trace!("Create payload: {:?}", task);

        let response = ensure_success(self.client.post(&url).json(task).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> ClientResult<Task> {
        let url = self.item_url(id);
        debug!("PATCH {}", url);
        trace!("Patch payload: {:?}", patch);

        let response = ensure_success(self.client.patch(&url).json(patch).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &TaskId) -> ClientResult<bool> {
        let url = self.item_url(id);
        debug!("DELETE {}", url);

        // Body of a successful delete is ignored
        ensure_success(self.client.delete(&url).send().await?).await?;
        Ok(true)
    }
}

static_assertions::assert_impl_all!(HttpTransport: Send, Sync);
