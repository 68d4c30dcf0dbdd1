//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{EditField, Task, TaskStatus},
    services::{ActionOutcome, TaskLifecycleController},
};

/// Controller type used by the BDD world.
pub type TestController = TaskLifecycleController<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub store: InMemoryTaskStore,
    pub controller: TestController,
    pub last_outcome: Option<ActionOutcome>,
    pub mutations_before_action: usize,
    pub typed_fields: Vec<(EditField, String)>,
}

impl TaskBoardWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryTaskStore::new();
        let controller =
            TaskLifecycleController::new(Arc::new(store.clone()), Arc::new(DefaultClock));

        Self {
            store,
            controller,
            last_outcome: None,
            mutations_before_action: 0,
            typed_fields: Vec::new(),
        }
    }

    /// Finds a task in the controller's snapshot by title.
    ///
    /// # Errors
    ///
    /// Returns an error when no task in the snapshot has `title`.
    pub fn task_titled(&self, title: &str) -> Result<Task, eyre::Report> {
        self.controller
            .tasks()
            .into_iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} on the board"))
    }

    /// Records the store's write count before the step under test.
    pub fn mark_mutations(&mut self) {
        self.mutations_before_action = self.store.call_counts().mutations();
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Parses a status written in a scenario.
///
/// # Errors
///
/// Returns an error when `raw` is not a known status.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
