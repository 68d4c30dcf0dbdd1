//! Pending edit state for a single task.

use super::{Task, TaskId};

/// Editable task field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    /// The task title.
    Title,
    /// The task description.
    Description,
    /// The due timestamp, as typed.
    DueDateTime,
}

/// Unsaved field values, held exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditOverlay {
    /// Title text.
    pub title: String,
    /// Description text; empty means no description.
    pub description: String,
    /// Due timestamp text; empty means absent.
    pub due_date_time: String,
}

impl EditOverlay {
    /// Copies the editable fields of `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().unwrap_or_default().to_owned(),
            due_date_time: task.due_date_time().to_string(),
        }
    }

    /// Returns the current text of `field`.
    #[must_use]
    pub fn field(&self, field: EditField) -> &str {
        match field {
            EditField::Title => &self.title,
            EditField::Description => &self.description,
            EditField::DueDateTime => &self.due_date_time,
        }
    }

    /// Replaces the text of `field`.
    pub fn set_field(&mut self, field: EditField, value: String) {
        let slot = match field {
            EditField::Title => &mut self.title,
            EditField::Description => &mut self.description,
            EditField::DueDateTime => &mut self.due_date_time,
        };
        *slot = value;
    }
}

/// The one task currently being edited, with its unsaved overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    task_id: TaskId,
    overlay: EditOverlay,
}

impl EditSession {
    /// Starts an edit of `task` seeded with its current values.
    #[must_use]
    pub fn begin(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            overlay: EditOverlay::from_task(task),
        }
    }

    /// Returns the identifier of the task under edit.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the unsaved values.
    #[must_use]
    pub const fn overlay(&self) -> &EditOverlay {
        &self.overlay
    }

    /// Replaces the text of one field in the overlay.
    pub fn set_field(&mut self, field: EditField, value: String) {
        self.overlay.set_field(field, value);
    }
}
