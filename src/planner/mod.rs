//! The planning pipeline: parse, level, assign.
//!
//! `Plan::build` is the whole computation as a pure function from input
//! text to either a completed plan or a typed error. The three stages run
//! sequentially over one task graph; there is no partial plan on failure.

pub mod assigner;
pub mod leveler;
pub mod parser;

use crate::core::{Task, TaskGraph};
use crate::error::Result;
use crate::rlog_warn;

/// A completed execution plan.
///
/// Every task in the plan carries a resolved priority and a scheduled
/// (iteration, executor) slot.
#[derive(Debug)]
pub struct Plan {
    /// Declared task count from the input header (informational).
    pub declared_count: usize,
    /// Executor capacity the plan was built for.
    pub executors: usize,
    graph: TaskGraph,
}

impl Plan {
    /// Build a plan from raw input text using the header's executor count.
    pub fn build(input: &str) -> Result<Self> {
        Self::build_with_executors(input, None)
    }

    /// Build a plan, optionally overriding the header's executor count.
    ///
    /// The override exists for the surrounding CLI layer; the input format
    /// itself always carries a capacity in the header.
    pub fn build_with_executors(input: &str, executors: Option<usize>) -> Result<Self> {
        let mut parsed = parser::parse(input)?;
        let executors = executors.unwrap_or(parsed.executors);

        if parsed.declared_count != parsed.graph.task_count() {
            rlog_warn!(
                "Header declares {} task(s) but input defines {}",
                parsed.declared_count,
                parsed.graph.task_count()
            );
        }

        leveler::assign_priorities(&mut parsed.graph)?;
        assigner::assign_slots(&mut parsed.graph, executors)?;

        Ok(Self {
            declared_count: parsed.declared_count,
            executors,
            graph: parsed.graph,
        })
    }

    /// The planned tasks, sorted ascending by priority.
    pub fn tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<_> = self.graph.tasks().collect();
        tasks.sort_by_key(|task| task.priority);
        tasks
    }

    /// Number of tasks in the plan.
    pub fn task_count(&self) -> usize {
        self.graph.task_count()
    }

    /// Number of dependency edges in the plan.
    pub fn dependency_count(&self) -> usize {
        self.graph.dependency_count()
    }

    /// Number of iterations the plan spans: ceil(tasks / executors).
    pub fn iterations(&self) -> u32 {
        self.graph
            .tasks()
            .filter_map(|task| task.slot)
            .map(|slot| slot.iteration)
            .max()
            .unwrap_or(0)
    }

    /// The underlying task graph.
    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }
}
