//! Rondo builds execution plans for dependency-chained task sets.
//!
//! The pipeline has three sequential stages over one in-memory task graph:
//! parse the chain format into a dependency graph, level it into unique
//! priorities that respect dependency order, then pack the priority-ordered
//! tasks onto a fixed number of executors across successive iterations.
//! The whole computation is a pure function from input text to either a
//! completed [`planner::Plan`] or a typed [`Error`]; there is no partial
//! plan on failure.

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod planner;

pub use crate::config::Config;
pub use crate::core::{Slot, Task, TaskGraph};
pub use crate::error::{Error, Result};
pub use crate::planner::Plan;
