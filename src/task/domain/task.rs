//! Task entity and the payloads used to create and edit tasks.

use super::{DueDateTime, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// A persisted task as returned by the remote store.
///
/// Deserializing validates the payload: the id must be positive, the status
/// known, and the due timestamp parseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    due_date_time: DueDateTime,
    status: TaskStatus,
}

impl Task {
    /// Materializes a new task under the identifier a store assigned to it.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: NewTask) -> Self {
        Self {
            id,
            title: new_task.title,
            description: new_task.description,
            due_date_time: new_task.due_date_time,
            status: new_task.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due timestamp.
    #[must_use]
    pub const fn due_date_time(&self) -> DueDateTime {
        self.due_date_time
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns a copy carrying `status`, as a store does after a status
    /// update.
    #[must_use]
    pub fn with_status(self, status: TaskStatus) -> Self {
        Self { status, ..self }
    }

    /// Returns a copy with the editable fields replaced by `update`.
    #[must_use]
    pub fn with_update(self, update: TaskUpdate) -> Self {
        Self {
            title: update.title,
            description: update.description,
            due_date_time: update.due_date_time,
            ..self
        }
    }
}

/// A task that has not been persisted and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Due timestamp.
    pub due_date_time: DueDateTime,
    /// Initial status.
    pub status: TaskStatus,
}

impl NewTask {
    /// Creates a pending task with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, due_date_time: DueDateTime) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date_time,
            status: TaskStatus::Pending,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Validated replacement values for a task's editable fields.
///
/// Only [`validate_edit`](super::validate_edit) produces these outside of
/// tests, so every update sent to a store has passed the edit rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    /// Replacement title, non-blank.
    pub title: String,
    /// Replacement description; `None` clears it.
    pub description: Option<String>,
    /// Replacement due timestamp.
    pub due_date_time: DueDateTime,
}
