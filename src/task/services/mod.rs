//! Application services for the task board.

mod controller;
mod form;
mod view;

pub use controller::{ActionOutcome, FetchOutcome, TaskLifecycleController};
pub use form::{TaskForm, TaskFormError};
pub use view::{BoardView, StoreOperation, TransportNotice};
