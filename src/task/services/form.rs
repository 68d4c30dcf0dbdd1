//! Task creation form.

use crate::task::{
    domain::{
        EditValidationError, NewTask, Task, TaskStatus, now_local, validate_due_date_time,
        validate_title,
    },
    ports::{RemoteTaskStore, TaskStoreError},
};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

/// Errors returned when submitting the creation form.
#[derive(Debug, Error)]
pub enum TaskFormError {
    /// A field rule failed; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] EditValidationError),
    /// The store rejected the new task.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Input state of the "add task" form.
///
/// Fields hold text as typed. After a successful submit the form resets, and
/// the caller re-fetches through the lifecycle controller to show the new
/// task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    /// Title text.
    pub title: String,
    /// Description text; empty means none.
    pub description: String,
    /// Due timestamp text.
    pub due_date_time: String,
    /// Initial status.
    pub status: TaskStatus,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date_time: String::new(),
            status: TaskStatus::Pending,
        }
    }
}

impl TaskForm {
    /// Creates an empty form with status [`TaskStatus::Pending`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the form and builds the task to create.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, title first.
    pub fn validate(&self, clock: &impl Clock) -> Result<NewTask, EditValidationError> {
        validate_title(&self.title)?;
        let due = validate_due_date_time(&self.due_date_time, now_local(clock))?;
        let mut new_task = NewTask::new(self.title.clone(), due).with_status(self.status);
        if !self.description.trim().is_empty() {
            new_task = new_task.with_description(self.description.clone());
        }
        Ok(new_task)
    }

    /// Validates, creates the task, and resets the form.
    ///
    /// The form keeps its contents when submission fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFormError::Invalid`] without contacting the store when a
    /// rule fails, or [`TaskFormError::Store`] when creation fails.
    pub async fn submit<S>(&mut self, store: &S, clock: &impl Clock) -> Result<Task, TaskFormError>
    where
        S: RemoteTaskStore + ?Sized,
    {
        let new_task = self.validate(clock)?;
        let created = store.create_task(new_task).await?;
        info!(task_id = %created.id(), "task created");
        self.reset();
        Ok(created)
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
