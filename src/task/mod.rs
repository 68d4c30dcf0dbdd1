//! Task board lifecycle management.
//!
//! This module holds the client side of the task board: the task entity, the
//! status transition and edit validation policies, the remote store contract
//! with its adapters, and the lifecycle controller that ties them together.
//! It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
