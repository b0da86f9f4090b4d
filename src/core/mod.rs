//! Core domain models for rondo planning.
//!
//! This module contains the fundamental data structures used throughout
//! the planning pipeline: tasks and the dependency graph they form.

pub mod graph;
pub mod task;

pub use graph::TaskGraph;
pub use task::{Slot, Task};
