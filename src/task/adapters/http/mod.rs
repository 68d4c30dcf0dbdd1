//! HTTP adapter for the remote task store port.

mod client;

pub use client::HttpTaskStore;
