//! In-memory task store for tests and offline demos.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskStatus, TaskUpdate},
    ports::{RemoteTaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Identifiers are assigned from 1 upwards and never reused, and tasks are
/// listed in insertion order. The store can be switched to "unreachable" to
/// exercise transport failure handling, and it counts every call it receives
/// so tests can assert which remote operations were attempted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    tasks: Vec<Task>,
    last_id: i64,
    unreachable: bool,
    calls: StoreCallCounts,
}

/// Number of calls received per store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCallCounts {
    /// Calls to [`RemoteTaskStore::list_tasks`].
    pub list_tasks: usize,
    /// Calls to [`RemoteTaskStore::list_tasks_by_status`].
    pub list_tasks_by_status: usize,
    /// Calls to [`RemoteTaskStore::get_task`].
    pub get_task: usize,
    /// Calls to [`RemoteTaskStore::create_task`].
    pub create_task: usize,
    /// Calls to [`RemoteTaskStore::update_task_status`].
    pub update_task_status: usize,
    /// Calls to [`RemoteTaskStore::update_task`].
    pub update_task: usize,
    /// Calls to [`RemoteTaskStore::delete_task`].
    pub delete_task: usize,
}

impl StoreCallCounts {
    /// Returns the number of calls that write to the store.
    #[must_use]
    pub const fn mutations(&self) -> usize {
        self.create_task + self.update_task_status + self.update_task + self.delete_task
    }
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `tasks`, assigning identifiers in order.
    #[must_use]
    pub fn seeded(tasks: impl IntoIterator<Item = NewTask>) -> Self {
        let mut state = InMemoryStoreState::default();
        for new_task in tasks {
            if insert(&mut state, new_task).is_err() {
                break;
            }
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Makes every subsequent call fail with [`TaskStoreError::Unavailable`]
    /// until reset.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .unreachable = unreachable;
    }

    /// Returns how many calls each operation has received.
    #[must_use]
    pub fn call_counts(&self) -> StoreCallCounts {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .calls
    }

    /// Returns a copy of the stored tasks without counting a call.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .tasks
            .clone()
    }

    /// Records a call and returns a write guard, or fails when unreachable.
    fn begin_call(
        &self,
        record: impl FnOnce(&mut StoreCallCounts),
    ) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryStoreState>> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::transport(std::io::Error::other(err.to_string()))
        })?;
        record(&mut state.calls);
        if state.unreachable {
            return Err(TaskStoreError::Unavailable(
                "in-memory store is marked unreachable".to_owned(),
            ));
        }
        Ok(state)
    }

    /// Records a read-only call and downgrades to a read guard.
    fn begin_read(
        &self,
        record: impl FnOnce(&mut StoreCallCounts),
    ) -> TaskStoreResult<RwLockReadGuard<'_, InMemoryStoreState>> {
        drop(self.begin_call(record)?);
        self.state.read().map_err(|err| {
            TaskStoreError::transport(std::io::Error::other(err.to_string()))
        })
    }
}

fn insert(state: &mut InMemoryStoreState, new_task: NewTask) -> TaskStoreResult<Task> {
    let next = state.last_id + 1;
    let id = TaskId::new(next).map_err(|err| TaskStoreError::InvalidPayload(err.to_string()))?;
    state.last_id = next;
    let task = Task::from_new(id, new_task);
    state.tasks.push(task.clone());
    Ok(task)
}

/// Replaces the task with `id` by `apply(task)` and returns the new value.
fn replace(
    state: &mut InMemoryStoreState,
    id: TaskId,
    apply: impl FnOnce(Task) -> Task,
) -> TaskStoreResult<Task> {
    let slot = state
        .tasks
        .iter_mut()
        .find(|task| task.id() == id)
        .ok_or(TaskStoreError::NotFound(id))?;
    let updated = apply(slot.clone());
    *slot = updated.clone();
    Ok(updated)
}

#[async_trait]
impl RemoteTaskStore for InMemoryTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.begin_read(|calls| calls.list_tasks += 1)?;
        Ok(state.tasks.clone())
    }

    async fn list_tasks_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>> {
        let state = self.begin_read(|calls| calls.list_tasks_by_status += 1)?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.begin_read(|calls| calls.get_task += 1)?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn create_task(&self, task: NewTask) -> TaskStoreResult<Task> {
        let mut state = self.begin_call(|calls| calls.create_task += 1)?;
        insert(&mut state, task)
    }

    async fn update_task_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Task> {
        let mut state = self.begin_call(|calls| calls.update_task_status += 1)?;
        replace(&mut state, id, |task| task.with_status(status))
    }

    async fn update_task(&self, id: TaskId, update: TaskUpdate) -> TaskStoreResult<Task> {
        let mut state = self.begin_call(|calls| calls.update_task += 1)?;
        replace(&mut state, id, |task| task.with_update(update))
    }

    async fn delete_task(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self.begin_call(|calls| calls.delete_task += 1)?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id() != id);
        if state.tasks.len() == before {
            return Err(TaskStoreError::NotFound(id));
        }
        Ok(())
    }
}
