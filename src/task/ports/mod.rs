//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod store;

pub use store::{RemoteTaskStore, TaskStoreError, TaskStoreResult};
