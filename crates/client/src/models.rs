//! Data models for Taskboard task records
//!
//! Defines the Rust types that map to the JSON task objects exchanged with
//! the remote record store, plus the create payload and partial patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque task identifier assigned by the remote store
///
/// Record stores differ in whether they emit ids as strings or numbers,
/// so both are accepted and kept in string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Create a task id from its string form
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as it appears in resource paths
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => TaskId(s),
            RawId::Number(n) => TaskId(n.to_string()),
        })
    }
}

/// Task status
///
/// A task is either still pending or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Completed,
}

impl Status {
    /// Returns the string representation used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }

    /// Parse a status from its wire representation
    pub fn parse(s: &str) -> Option<Status> {
        match s {
            "pending" => Some(Status::Pending),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }

    /// The opposite status, used when toggling completion
    pub fn toggled(self) -> Status {
        match self {
            Status::Pending => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority
///
/// An application-defined category (low, medium, high in the stock
/// dashboard). The client treats it as an opaque value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(String);

/// Priority applied to new tasks when the caller picks none
pub const DEFAULT_PRIORITY: &str = "medium";

impl Priority {
    /// Create a priority from any category value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the string representation used on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A task record as held by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier assigned by the store
    pub id: TaskId,

    /// Display title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Free-form description, empty when absent or null
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Current status
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,

    /// Category value used as an alternate filter key
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,

    /// When the creating client issued the create call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// The store does no validation, so an explicit `null` is read the same
/// as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload for creating a task
///
/// Carries every task field except the id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Create a pending, medium-priority payload with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: Status::default(),
            priority: Priority::default(),
            created_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Stamp the creation time, replacing any earlier stamp
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}

/// Partial field patch for an existing task
///
/// Only fields that are `Some` are sent to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// Create a new empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a new description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set a new priority
    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Check if any field is set
    pub fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.priority.is_some()
    }

    /// Apply this patch to a task, as a store with merge semantics would
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = &self.priority {
            task.priority = priority.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_as_str() {
        assert_eq!(Status::Pending.as_str(), "pending");
        assert_eq!(Status::Completed.as_str(), "completed");
    }

    #[test]
    fn test_status_toggled() {
        assert_eq!(Status::Pending.toggled(), Status::Completed);
        assert_eq!(Status::Completed.toggled(), Status::Pending);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(Status::parse("pending"), Some(Status::Pending));
        assert_eq!(Status::parse("completed"), Some(Status::Completed));
        assert_eq!(Status::parse("done"), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_priority_default_is_medium() {
        assert_eq!(Priority::default().as_str(), "medium");
    }

    #[test]
    fn test_task_id_accepts_string() {
        let id: TaskId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(id.as_str(), "a1b2");
    }

    #[test]
    fn test_task_id_accepts_number() {
        let id: TaskId = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
    }

    #[test]
    fn test_task_deserializes_store_object() {
        let json = r#"{
            "id": 3,
            "title": "Buy Milk",
            "description": "Two litres",
            "status": "completed",
            "priority": "high",
            "createdAt": "2024-05-01T10:30:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, TaskId::new("3"));
        assert_eq!(task.title, "Buy Milk");
        assert_eq!(task.description, "Two litres");
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.priority, Priority::new("high"));
        assert_eq!(
            task.created_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_task_missing_optional_fields_use_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": "x", "title": "Bare"}"#).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.priority, Priority::default());
        assert!(task.created_at.is_none());
    }

    #[test]
    fn test_task_null_fields_use_defaults() {
        let json = r#"{
            "id": 4,
            "title": null,
            "description": null,
            "status": null,
            "priority": null,
            "createdAt": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, TaskId::new("4"));
        assert_eq!(task.title, "");
        assert_eq!(task.description, "");
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.priority, Priority::default());
        assert!(task.created_at.is_none());
    }

    #[test]
    fn test_task_list_with_null_description_decodes() {
        let json = r#"[
            {"id": "1", "title": "Buy Milk", "description": null},
            {"id": "2", "title": "File taxes", "description": "Before April"}
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "");
        assert_eq!(tasks[1].description, "Before April");
    }

    #[test]
    fn test_new_task_serializes_without_id() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let payload = NewTask::new("X")
            .with_description("Y")
            .with_priority("low")
            .stamped(at);
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["title"], "X");
        assert_eq!(value["description"], "Y");
        assert_eq!(value["status"], "pending");
        assert_eq!(value["priority"], "low");
        assert_eq!(value["createdAt"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_new_task_unstamped_omits_created_at() {
        let value = serde_json::to_value(NewTask::new("X")).unwrap();
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = TaskPatch::new().with_status(Status::Completed);
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"status":"completed"}"#);
    }

    #[test]
    fn test_patch_has_updates() {
        assert!(!TaskPatch::new().has_updates());
        assert!(TaskPatch::new().with_title("t").has_updates());
        assert!(TaskPatch::new().with_priority("high").has_updates());
    }

    #[test]
    fn test_patch_apply_to_leaves_unset_fields() {
        let mut task = Task {
            id: TaskId::new("1"),
            title: "Old".to_string(),
            description: "Keep".to_string(),
            status: Status::Pending,
            priority: Priority::new("low"),
            created_at: None,
        };
        TaskPatch::new()
            .with_title("New")
            .with_status(Status::Completed)
            .apply_to(&mut task);
        assert_eq!(task.title, "New");
        assert_eq!(task.description, "Keep");
        assert_eq!(task.status, Status::Completed);
        assert_eq!(task.priority, Priority::new("low"));
    }
}
