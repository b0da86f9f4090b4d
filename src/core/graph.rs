//! Task dependency graph.
//!
//! TaskGraph stores the task set as a directed graph where an edge A -> B
//! means "B depends on A" (A must be resolved before B). Tasks are keyed
//! by name; looking up a name that already exists returns the existing
//! node rather than creating a duplicate.

use crate::core::task::Task;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;

/// The task dependency graph.
///
/// Uses petgraph's DiGraph for storage. Node weights are the owned Task
/// records; dependencies are plain edges, so converging branches never
/// create ownership cycles. Node indices double as discovery order: the
/// parser inserts tasks in the order their names first appear.
pub struct TaskGraph {
    /// The underlying directed graph. Edge A -> B means B depends on A.
    graph: DiGraph<Task, ()>,
    /// Index mapping from task name to NodeIndex for fast lookups.
    name_index: HashMap<String, NodeIndex>,
}

impl TaskGraph {
    /// Create a new empty TaskGraph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
        }
    }

    /// Look up a task by name, creating it if it does not exist yet.
    ///
    /// Returns the NodeIndex of the (existing or new) task. Idempotent:
    /// re-mentioning a name always returns the same node.
    pub fn ensure_task(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.name_index.get(name) {
            return index;
        }

        let index = self.graph.add_node(Task::new(name));
        self.name_index.insert(name.to_string(), index);
        index
    }

    /// Declare that `to` depends on `from`.
    ///
    /// Dependency sets behave as sets: declaring the same edge twice is a
    /// no-op. Cycles are not rejected here; the leveler surfaces them when
    /// no valid ordering exists.
    pub fn add_dependency(&mut self, from: NodeIndex, to: NodeIndex) {
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, ());
        }
    }

    /// Get a reference to a task by name.
    pub fn get_task(&self, name: &str) -> Option<&Task> {
        self.name_index
            .get(name)
            .and_then(|&index| self.graph.node_weight(index))
    }

    /// Get a reference to a task by its node index.
    pub fn task(&self, index: NodeIndex) -> Option<&Task> {
        self.graph.node_weight(index)
    }

    /// Get a mutable reference to a task by its node index.
    pub fn task_mut(&mut self, index: NodeIndex) -> Option<&mut Task> {
        self.graph.node_weight_mut(index)
    }

    /// Check if the graph contains a task with the given name.
    pub fn contains_task(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Get the number of tasks in the graph.
    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of dependency edges in the graph.
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node indices in discovery order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// All tasks in discovery order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.graph.node_weights()
    }

    /// Tasks the given task depends on (predecessors).
    pub fn dependencies(&self, index: NodeIndex) -> impl Iterator<Item = &Task> {
        self.graph
            .neighbors_directed(index, Direction::Incoming)
            .filter_map(|dep| self.graph.node_weight(dep))
    }

    /// Names of the tasks the named task depends on.
    ///
    /// Returns an empty vector for unknown names.
    pub fn dependency_names(&self, name: &str) -> Vec<String> {
        match self.name_index.get(name) {
            Some(&index) => self
                .dependencies(index)
                .map(|task| task.name.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check whether every dependency of the task at `index` is resolved.
    pub fn dependencies_resolved(&self, index: NodeIndex) -> bool {
        self.dependencies(index).all(|dep| dep.is_resolved())
    }

    /// Sum of the priorities of the task's dependencies.
    ///
    /// Unresolved dependencies contribute 0, mirroring the leveler's
    /// tie-break rule.
    pub fn dependency_priority_sum(&self, index: NodeIndex) -> u64 {
        self.dependencies(index)
            .map(|dep| u64::from(dep.priority))
            .sum()
    }

    /// Names of tasks still without a priority, in discovery order.
    pub fn unresolved_names(&self) -> Vec<String> {
        self.tasks()
            .filter(|task| !task.is_resolved())
            .map(|task| task.name.clone())
            .collect()
    }
}

impl Default for TaskGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskGraph")
            .field("tasks", &self.task_count())
            .field("dependencies", &self.dependency_count())
            .finish()
    }
}
