//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{DueDateTime, NewTask, TaskId, TaskStatus},
    services::TaskLifecycleController,
};

/// Controller type used by the in-memory suites.
pub type TestController = TaskLifecycleController<InMemoryTaskStore, DefaultClock>;

/// Due timestamp far enough ahead that edits always validate.
pub const FUTURE_DUE: &str = "2099-01-01T00:00";

/// Parses a due timestamp known to be well formed.
///
/// # Errors
///
/// Returns an error if `text` is not an ISO-local timestamp.
pub fn due(text: &str) -> Result<DueDateTime, eyre::Report> {
    text.parse()
        .map_err(|err| eyre::eyre!("invalid due timestamp in test: {err}"))
}

/// Builds a task draft due far in the future.
///
/// # Errors
///
/// Returns an error if the built-in due timestamp fails to parse.
pub fn draft(title: &str, status: TaskStatus) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::new(title, due(FUTURE_DUE)?).with_status(status))
}

/// Converts a raw identifier into a [`TaskId`].
///
/// # Errors
///
/// Returns an error if `value` is not positive.
pub fn task_id(value: i64) -> Result<TaskId, eyre::Report> {
    Ok(TaskId::new(value)?)
}

/// Provides an empty store.
#[fixture]
pub fn store() -> InMemoryTaskStore {
    InMemoryTaskStore::new()
}

/// Provides a store seeded with one task per status, ids 1 to 3.
#[fixture]
pub fn seeded_store() -> InMemoryTaskStore {
    let drafts = [
        ("Pay rent", TaskStatus::Pending),
        ("Write report", TaskStatus::InProgress),
        ("File taxes", TaskStatus::Completed),
    ];
    InMemoryTaskStore::seeded(
        drafts
            .into_iter()
            .filter_map(|(title, status)| draft(title, status).ok()),
    )
}

/// Builds a controller over a handle that shares `store`'s state.
#[must_use]
pub fn controller_for(store: &InMemoryTaskStore) -> TestController {
    TaskLifecycleController::new(Arc::new(store.clone()), Arc::new(DefaultClock))
}
