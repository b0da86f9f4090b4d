//! Executor assignment over a fully leveled task graph.
//!
//! Walks the tasks in priority order and packs them into iterations of
//! `executors` slots each, numbering executors from the capacity down
//! to 1 within every iteration.

use crate::core::TaskGraph;
use crate::error::{Error, Result};
use crate::rlog_debug;

/// Assign an (iteration, executor) slot to every task.
///
/// Tasks are taken in ascending priority order; priorities are unique, so
/// the order is total. The task at zero-based rank `r` lands in iteration
/// `r / executors + 1` on executor `executors - (r % executors)`.
///
/// # Errors
/// Returns `Error::InvalidExecutorCount` if `executors` is 0, before any
/// slot is assigned.
pub fn assign_slots(graph: &mut TaskGraph, executors: usize) -> Result<()> {
    if executors == 0 {
        return Err(Error::InvalidExecutorCount { count: executors });
    }

    let mut order: Vec<_> = graph
        .node_indices()
        .map(|index| {
            let priority = graph.task(index).map(|task| task.priority).unwrap_or(0);
            (priority, index)
        })
        .collect();
    order.sort_by_key(|&(priority, _)| priority);

    for (rank, (_, index)) in order.into_iter().enumerate() {
        let iteration = (rank / executors + 1) as u32;
        let executor = (executors - rank % executors) as u32;
        if let Some(task) = graph.task_mut(index) {
            task.schedule(iteration, executor);
        }
    }

    rlog_debug!(
        "Assigned {} task(s) across {} executor(s)",
        graph.task_count(),
        executors
    );

    Ok(())
}
