//! In-memory adapter for the remote task store port.

mod store;

pub use store::{InMemoryTaskStore, StoreCallCounts};
