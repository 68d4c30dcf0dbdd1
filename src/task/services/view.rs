//! Read-only state handed to the presentation layer.

use crate::task::domain::{EditSession, EditValidationError, GroupedTasks, SectionVisibility};
use std::fmt;

/// Remote operation a transport notice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Loading the task snapshot.
    Fetch,
    /// Changing a task's status.
    ChangeStatus,
    /// Deleting a task.
    Delete,
    /// Saving a pending edit.
    Save,
}

impl StoreOperation {
    /// Returns the fixed user-facing message for a failure of this operation.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Fetch => "Unable to load tasks. Please try again.",
            Self::ChangeStatus => "Unable to update the task status. Please try again.",
            Self::Delete => "Unable to delete the task. Please try again.",
            Self::Save => "Unable to save the task changes. Please try again.",
        }
    }
}

/// User-facing notice that a remote call failed.
///
/// Diagnostic detail is logged, never shown; the notice only carries which
/// operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportNotice {
    operation: StoreOperation,
}

impl TransportNotice {
    /// Creates a notice for a failed `operation`.
    #[must_use]
    pub const fn new(operation: StoreOperation) -> Self {
        Self { operation }
    }

    /// Returns the failed operation.
    #[must_use]
    pub const fn operation(&self) -> StoreOperation {
        self.operation
    }

    /// Returns the message to display.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.operation.failure_message()
    }
}

impl fmt::Display for TransportNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything the presentation layer may read from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Current snapshot grouped by status.
    pub groups: GroupedTasks,
    /// Expanded flag per status section.
    pub sections: SectionVisibility,
    /// The edit in progress, if any.
    pub pending_edit: Option<EditSession>,
    /// Last transport failure, if not yet cleared.
    pub transport_error: Option<TransportNotice>,
    /// Last validation failure, if not yet cleared.
    pub validation_error: Option<EditValidationError>,
}
