//! Task lifecycle controller.
//!
//! The controller owns the client's view of the task set and every in-flight
//! user intention. Each mutation goes to the remote store first and is then
//! followed by a full re-fetch; nothing in the snapshot is ever changed
//! locally. Failures are recorded in the controller's error slots and logged,
//! never returned to the caller.

use crate::config::FetchStrategy;
use crate::task::{
    domain::{
        EditField, EditSession, EditValidationError, GroupedTasks, SectionVisibility,
        StatusSelection, Task, TaskId, TaskStatus, group_by_status, now_local,
        validate_due_date_time, validate_edit, validate_title,
    },
    ports::{RemoteTaskStore, TaskStoreError, TaskStoreResult},
};
use mockable::Clock;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::view::{BoardView, StoreOperation, TransportNotice};

/// Result of a user action routed through the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The remote write succeeded and a re-fetch was issued.
    Applied,
    /// The action was a no-op intent and nothing was sent.
    Ignored,
    /// The pending edit failed validation and nothing was sent.
    Invalid(EditValidationError),
    /// The remote call failed; the transport slot holds the notice.
    TransportFailed,
}

/// Result of a snapshot fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The snapshot was replaced with this many tasks.
    Replaced {
        /// Number of tasks in the new snapshot.
        tasks: usize,
    },
    /// The fetch failed and the previous snapshot was kept.
    Failed,
    /// A later fetch had already been applied, so this response was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct BoardState {
    tasks: Vec<Task>,
    sections: SectionVisibility,
    pending_edit: Option<EditSession>,
    transport_error: Option<TransportNotice>,
    validation_error: Option<EditValidationError>,
    issued_fetches: u64,
    applied_fetch: u64,
}

/// Client-side task lifecycle controller.
///
/// Methods take `&self` and may overlap; the internal lock is never held
/// across a remote call. Fetch responses are applied in issue order, and a
/// response older than the last applied one is dropped.
pub struct TaskLifecycleController<S, C>
where
    S: RemoteTaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    fetch_strategy: FetchStrategy,
    state: Mutex<BoardState>,
}

impl<S, C> TaskLifecycleController<S, C>
where
    S: RemoteTaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a controller with an empty snapshot and all sections expanded.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            fetch_strategy: FetchStrategy::default(),
            state: Mutex::new(BoardState::default()),
        }
    }

    /// Sets how snapshots are loaded from the store.
    #[must_use]
    pub fn with_fetch_strategy(mut self, fetch_strategy: FetchStrategy) -> Self {
        self.fetch_strategy = fetch_strategy;
        self
    }

    /// Reloads the snapshot from the store.
    ///
    /// On success the snapshot is replaced and the transport slot cleared. On
    /// failure the previous snapshot stays available and the transport slot
    /// is set.
    pub async fn fetch_all(&self) -> FetchOutcome {
        let token = {
            let mut state = self.state.lock();
            state.issued_fetches += 1;
            state.issued_fetches
        };

        let result = self.load_snapshot().await;

        let mut state = self.state.lock();
        if token < state.applied_fetch {
            debug!(token, applied = state.applied_fetch, "dropping superseded fetch");
            return FetchOutcome::Superseded;
        }
        state.applied_fetch = token;
        match result {
            Ok(tasks) => {
                let count = tasks.len();
                debug!(count, "task snapshot replaced");
                state.tasks = tasks;
                state.transport_error = None;
                FetchOutcome::Replaced { tasks: count }
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch tasks");
                state.transport_error = Some(TransportNotice::new(StoreOperation::Fetch));
                FetchOutcome::Failed
            }
        }
    }

    async fn load_snapshot(&self) -> TaskStoreResult<Vec<Task>> {
        match self.fetch_strategy {
            FetchStrategy::Combined => self.store.list_tasks().await,
            FetchStrategy::PerStatus => {
                let mut tasks = Vec::new();
                for status in TaskStatus::ALL {
                    tasks.extend(self.store.list_tasks_by_status(status).await?);
                }
                Ok(tasks)
            }
        }
    }

    /// Moves a task to the selected status and re-fetches.
    ///
    /// [`StatusSelection::NoChange`] is ignored. So is a target that the
    /// transition policy does not allow from the task's status in the current
    /// snapshot. Tasks missing from the snapshot are forwarded to the store
    /// unchecked.
    pub async fn change_status(&self, id: TaskId, selection: StatusSelection) -> ActionOutcome {
        let Some(target) = selection.target() else {
            debug!(task_id = %id, "no status selected");
            return ActionOutcome::Ignored;
        };
        if let Some(current) = self.current_status(id) {
            if !current.can_transition_to(target) {
                debug!(task_id = %id, from = %current, to = %target, "transition not offered");
                return ActionOutcome::Ignored;
            }
        }

        match self.store.update_task_status(id, target).await {
            Ok(_) => {
                info!(task_id = %id, status = %target, "task status updated");
                self.clear_transport_error();
                self.fetch_all().await;
                ActionOutcome::Applied
            }
            Err(err) => self.record_transport_failure(StoreOperation::ChangeStatus, id, &err),
        }
    }

    /// Deletes a task and re-fetches.
    pub async fn delete_task(&self, id: TaskId) -> ActionOutcome {
        match self.store.delete_task(id).await {
            Ok(()) => {
                info!(task_id = %id, "task deleted");
                self.clear_transport_error();
                self.fetch_all().await;
                ActionOutcome::Applied
            }
            Err(err) => self.record_transport_failure(StoreOperation::Delete, id, &err),
        }
    }

    /// Starts editing `task`, discarding any other unsaved edit.
    pub fn begin_edit(&self, task: &Task) {
        let mut state = self.state.lock();
        if let Some(previous) = state.pending_edit.as_ref() {
            debug!(
                abandoned = %previous.task_id(),
                task_id = %task.id(),
                "replacing unsaved edit"
            );
        }
        state.pending_edit = Some(EditSession::begin(task));
        state.validation_error = None;
    }

    /// Updates one field of the pending edit.
    ///
    /// When the validation slot holds this field's error and the new value
    /// already satisfies the field's rule, the slot is cleared. Saving still
    /// runs every rule. Returns `false` when no edit is pending.
    pub fn update_edit_field(&self, field: EditField, value: impl Into<String>) -> bool {
        let text = value.into();
        let satisfied = match field {
            EditField::Title => validate_title(&text).is_ok(),
            EditField::DueDateTime => {
                validate_due_date_time(&text, now_local(&*self.clock)).is_ok()
            }
            EditField::Description => false,
        };

        let mut guard = self.state.lock();
        let state = &mut *guard;
        let Some(session) = state.pending_edit.as_mut() else {
            return false;
        };
        session.set_field(field, text);
        if satisfied
            && state
                .validation_error
                .as_ref()
                .is_some_and(|err| err.field() == field)
        {
            state.validation_error = None;
        }
        true
    }

    /// Validates and saves the pending edit of task `id`, then re-fetches.
    ///
    /// A validation failure is recorded and nothing is sent. A transport
    /// failure leaves the edit open so the save can be retried. When the
    /// write lands after another edit has begun, that edit and its
    /// validation error are left alone.
    pub async fn save_edit(&self, id: TaskId) -> ActionOutcome {
        let (session, update) = {
            let mut state = self.state.lock();
            let Some(session) = state
                .pending_edit
                .as_ref()
                .filter(|session| session.task_id() == id)
                .cloned()
            else {
                debug!(task_id = %id, "no pending edit for task");
                return ActionOutcome::Ignored;
            };
            match validate_edit(session.overlay(), &*self.clock) {
                Ok(update) => (session, update),
                Err(err) => {
                    debug!(task_id = %id, error = %err, "edit rejected");
                    state.validation_error = Some(err.clone());
                    return ActionOutcome::Invalid(err);
                }
            }
        };

        match self.store.update_task(id, update).await {
            Ok(_) => {
                info!(task_id = %id, "task edit saved");
                {
                    let mut state = self.state.lock();
                    // A newer edit keeps its own slot and validation error.
                    if state.pending_edit.as_ref() == Some(&session) {
                        state.pending_edit = None;
                        state.validation_error = None;
                    }
                    state.transport_error = None;
                }
                self.fetch_all().await;
                ActionOutcome::Applied
            }
            Err(err) => self.record_transport_failure(StoreOperation::Save, id, &err),
        }
    }

    /// Discards the pending edit and its validation error.
    ///
    /// Returns `false` when no edit was pending.
    pub fn cancel_edit(&self) -> bool {
        let mut state = self.state.lock();
        state.validation_error = None;
        state.pending_edit.take().is_some()
    }

    /// Flips the expanded flag of a status section and returns the new value.
    pub fn toggle_section(&self, status: TaskStatus) -> bool {
        self.state.lock().sections.toggle(status)
    }

    /// Partitions the current snapshot by status.
    #[must_use]
    pub fn group_by_status(&self) -> GroupedTasks {
        group_by_status(&self.state.lock().tasks)
    }

    /// Returns everything the presentation layer renders.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let state = self.state.lock();
        BoardView {
            groups: group_by_status(&state.tasks),
            sections: state.sections,
            pending_edit: state.pending_edit.clone(),
            transport_error: state.transport_error,
            validation_error: state.validation_error.clone(),
        }
    }

    /// Returns the current snapshot in store order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().tasks.clone()
    }

    /// Returns the section visibility flags.
    #[must_use]
    pub fn sections(&self) -> SectionVisibility {
        self.state.lock().sections
    }

    /// Returns the pending edit, if any.
    #[must_use]
    pub fn pending_edit(&self) -> Option<EditSession> {
        self.state.lock().pending_edit.clone()
    }

    /// Returns the transport notice, if any.
    #[must_use]
    pub fn transport_error(&self) -> Option<TransportNotice> {
        self.state.lock().transport_error
    }

    /// Returns the validation error, if any.
    #[must_use]
    pub fn validation_error(&self) -> Option<EditValidationError> {
        self.state.lock().validation_error.clone()
    }

    fn current_status(&self, id: TaskId) -> Option<TaskStatus> {
        self.state
            .lock()
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .map(Task::status)
    }

    fn clear_transport_error(&self) {
        self.state.lock().transport_error = None;
    }

    fn record_transport_failure(
        &self,
        operation: StoreOperation,
        id: TaskId,
        err: &TaskStoreError,
    ) -> ActionOutcome {
        warn!(task_id = %id, ?operation, error = %err, "task store call failed");
        self.state.lock().transport_error = Some(TransportNotice::new(operation));
        ActionOutcome::TransportFailed
    }
}
