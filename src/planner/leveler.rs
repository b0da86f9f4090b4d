//! Priority leveling over the task graph.
//!
//! Resolves tasks round by round: every round picks up the tasks whose
//! dependencies were all resolved in earlier rounds and hands them the
//! next priorities in a strictly increasing global sequence. This is a
//! breadth-level topological sort; bucketing the resulting priorities
//! later is what turns them into iterations.

use crate::core::TaskGraph;
use crate::error::{Error, Result};
use crate::rlog_debug;

/// Assign a priority to every task in the graph, or fail.
///
/// Candidates for a round are snapshotted before any of them is resolved,
/// so resolutions within a round only unlock tasks for the next round.
/// Within a round, tasks are ordered by ascending sum of their dependency
/// priorities, ties broken by discovery order. The resulting assignment
/// is deterministic for a given parsed graph.
///
/// # Errors
/// Returns `Error::CyclicDependency` if any task is still unresolved once
/// a round makes no progress. No partial result is usable: the caller must
/// treat the whole task set as unplannable.
pub fn assign_priorities(graph: &mut TaskGraph) -> Result<()> {
    let mut next_priority: u32 = 1;
    let mut round: u32 = 0;

    loop {
        round += 1;

        // Snapshot this round's resolvable tasks with their tie-break key.
        let mut candidates: Vec<_> = graph
            .node_indices()
            .filter(|&index| {
                let unresolved = graph
                    .task(index)
                    .map(|task| !task.is_resolved())
                    .unwrap_or(false);
                unresolved && graph.dependencies_resolved(index)
            })
            .map(|index| (graph.dependency_priority_sum(index), index))
            .collect();

        if candidates.is_empty() {
            break;
        }

        candidates.sort_by_key(|&(sum, index)| (sum, index));

        for (_, index) in candidates {
            if let Some(task) = graph.task_mut(index) {
                task.resolve(next_priority);
                next_priority += 1;
            }
        }

        rlog_debug!(
            "Leveling round {}: {} of {} task(s) resolved",
            round,
            next_priority - 1,
            graph.task_count()
        );
    }

    let unresolved = graph.unresolved_names();
    if !unresolved.is_empty() {
        return Err(Error::CyclicDependency { unresolved });
    }

    Ok(())
}
