//! Step definitions for task board lifecycle scenarios.

pub mod world;

mod then;
