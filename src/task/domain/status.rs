//! Task status and the status transition policy.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Every status in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Returns the statuses a task in this status may move to.
    ///
    /// The order is the order in which the affordances are presented.
    #[must_use]
    pub const fn legal_targets(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::InProgress],
            Self::InProgress => &[Self::Completed, Self::Pending],
            Self::Completed => &[Self::Pending, Self::InProgress],
        }
    }

    /// Returns whether a task may move from this status to `target`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.legal_targets().contains(&target)
    }

    /// Returns the UI affordance that triggers this status's transitions.
    #[must_use]
    pub const fn affordance(self) -> TransitionAffordance {
        match self {
            Self::Pending => TransitionAffordance::SingleAction(Self::InProgress),
            Self::InProgress => TransitionAffordance::TwoActions(Self::Completed, Self::Pending),
            Self::Completed => TransitionAffordance::Selection([Self::Pending, Self::InProgress]),
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the presentation layer offers a status's outbound transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAffordance {
    /// One button moving to the given status.
    SingleAction(TaskStatus),
    /// Two buttons, primary first.
    TwoActions(TaskStatus, TaskStatus),
    /// A selection control whose default entry is [`StatusSelection::NoChange`].
    Selection([TaskStatus; 2]),
}

impl TransitionAffordance {
    /// Returns the selections the affordance can produce.
    ///
    /// A selection control also yields [`StatusSelection::NoChange`], listed
    /// first because it is the control's resting value.
    #[must_use]
    pub fn selections(self) -> Vec<StatusSelection> {
        match self {
            Self::SingleAction(target) => vec![StatusSelection::Target(target)],
            Self::TwoActions(primary, secondary) => vec![
                StatusSelection::Target(primary),
                StatusSelection::Target(secondary),
            ],
            Self::Selection(options) => std::iter::once(StatusSelection::NoChange)
                .chain(options.into_iter().map(StatusSelection::Target))
                .collect(),
        }
    }
}

/// A user's status choice, including the explicit "no selection" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusSelection {
    /// No change requested. Always a no-op.
    #[default]
    NoChange,
    /// Move the task to this status.
    Target(TaskStatus),
}

impl StatusSelection {
    /// Returns the requested status, or `None` for the sentinel.
    #[must_use]
    pub const fn target(self) -> Option<TaskStatus> {
        match self {
            Self::NoChange => None,
            Self::Target(status) => Some(status),
        }
    }
}

impl From<TaskStatus> for StatusSelection {
    fn from(status: TaskStatus) -> Self {
        Self::Target(status)
    }
}
