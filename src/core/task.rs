//! Task data model for the execution plan.
//!
//! Tasks are named units of work related by dependency edges. Each task
//! carries its resolved priority and, once the assigner has run, the
//! (iteration, executor) slot it is scheduled into.

use serde::{Deserialize, Serialize};

/// A scheduling slot in the output plan.
///
/// `iteration` is the 1-based execution round; `executor` is the 1-based
/// resource number within that round. Executors within an iteration are
/// filled from the highest number down to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Execution round this task runs in (1-based).
    pub iteration: u32,
    /// Executor number within the iteration (1-based).
    pub executor: u32,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "iteration {} / executor {}", self.iteration, self.executor)
    }
}

/// A single task in the dependency graph.
///
/// Identity is the name: names are unique within a run and case-sensitive.
/// `priority` starts at 0 (unresolved) and is set exactly once by the
/// leveler; `slot` is set by the assigner after every priority is resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique, case-sensitive task name.
    pub name: String,
    /// Resolved priority; 0 means not yet resolved.
    pub priority: u32,
    /// Assigned (iteration, executor) pair, if the assigner has run.
    #[serde(flatten)]
    pub slot: Option<Slot>,
}

impl Task {
    /// Create an unresolved task with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            priority: 0,
            slot: None,
        }
    }

    /// Check whether the leveler has assigned a priority.
    pub fn is_resolved(&self) -> bool {
        self.priority != 0
    }

    /// Assign the priority. Set exactly once per run.
    pub fn resolve(&mut self, priority: u32) {
        debug_assert!(priority > 0, "priorities are 1-based");
        self.priority = priority;
    }

    /// Place the task into a scheduling slot.
    pub fn schedule(&mut self, iteration: u32, executor: u32) {
        self.slot = Some(Slot {
            iteration,
            executor,
        });
    }

    /// Check whether the assigner has placed this task.
    pub fn is_scheduled(&self) -> bool {
        self.slot.is_some()
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.slot {
            Some(slot) => write!(f, "{} (priority {}, {})", self.name, self.priority, slot),
            None => write!(f, "{} (priority {})", self.name, self.priority),
        }
    }
}
