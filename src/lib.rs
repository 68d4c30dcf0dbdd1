//! Taskboard: client for a remote task-tracking service.
//!
//! This crate lists, creates, edits, and moves tasks held by a remote task
//! store. The remote store is always the source of truth: every mutation is
//! sent to it and followed by a full re-fetch.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task model, policies, store port, and lifecycle controller
//! - [`config`]: Client configuration

pub mod config;
pub mod task;
