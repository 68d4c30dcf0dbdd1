//! Error types for task domain validation and parsing.

use super::EditField;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a positive integer.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// The status value is not one of the known statuses.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The due timestamp could not be parsed.
    #[error(transparent)]
    InvalidDueDateTime(#[from] ParseDueDateTimeError),
}

/// Error returned while parsing task statuses from wire or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing an ISO-local due timestamp.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid due date and time '{0}', expected YYYY-MM-DDTHH:MM[:SS]")]
pub struct ParseDueDateTimeError(pub String);

/// A violated edit rule.
///
/// The display text is the user-facing message shown in the validation slot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditValidationError {
    /// The title is empty after trimming.
    #[error("Title cannot be blank.")]
    BlankTitle,

    /// No due timestamp was given.
    #[error("Due date and time is required.")]
    MissingDueDateTime,

    /// The due timestamp text does not parse.
    #[error("Due date and time is not a valid timestamp: {0}")]
    UnparseableDueDateTime(String),

    /// The due timestamp is not strictly after the current time.
    #[error("Due date must be in the future.")]
    DueDateTimeNotInFuture,
}

impl EditValidationError {
    /// Returns the field whose rule was violated.
    #[must_use]
    pub const fn field(&self) -> EditField {
        match self {
            Self::BlankTitle => EditField::Title,
            Self::MissingDueDateTime
            | Self::UnparseableDueDateTime(_)
            | Self::DueDateTimeNotInFuture => EditField::DueDateTime,
        }
    }
}
