//! Port for the remote task store.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatus, TaskUpdate};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Remote task store contract.
///
/// The store is the source of truth for tasks and the only component that
/// assigns identifiers.
#[async_trait]
pub trait RemoteTaskStore: Send + Sync {
    /// Returns every task, in whatever order the store keeps them.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Returns the tasks currently in `status`, filtered by the store.
    async fn list_tasks_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_task(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Persists a new task and returns it with its assigned identifier.
    async fn create_task(&self, task: NewTask) -> TaskStoreResult<Task>;

    /// Changes only the status of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update_task_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Task>;

    /// Replaces the editable fields of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update_task(&self, id: TaskId, update: TaskUpdate) -> TaskStoreResult<Task>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete_task(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by remote task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store could not be reached.
    #[error("task store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with a status the client does not handle.
    #[error("task store returned {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The store's response could not be decoded into domain values.
    #[error("invalid task store payload: {0}")]
    InvalidPayload(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
