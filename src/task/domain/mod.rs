//! Domain model for the task board.
//!
//! The task domain holds the entity shape, the status transition policy, and
//! the edit validation rules. Everything here is pure: no I/O, and "now" is
//! only ever read through an injected clock.

mod due;
mod edit;
mod error;
mod grouping;
mod ids;
mod status;
mod task;
mod validation;

pub use due::DueDateTime;
pub use edit::{EditField, EditOverlay, EditSession};
pub use error::{EditValidationError, ParseDueDateTimeError, ParseTaskStatusError, TaskDomainError};
pub use grouping::{GroupedTasks, SectionVisibility, group_by_status};
pub use ids::TaskId;
pub use status::{StatusSelection, TaskStatus, TransitionAffordance};
pub use task::{NewTask, Task, TaskUpdate};
pub use validation::{validate_due_date_time, validate_edit, validate_title};

pub(crate) use validation::now_local;
