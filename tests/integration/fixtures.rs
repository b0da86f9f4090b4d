//! Test fixtures for integration tests.
//!
//! Provides canned inputs and small helpers shared across the suite.

use rondo::core::Slot;
use rondo::planner::Plan;

/// Linear chain of five tasks with two executors.
pub const LINEAR_FIVE: &str = "5 2\na-b-c-d-e\n";

/// Two chains sharing a task, per the chained-declaration format.
pub const SHARED_CHAIN: &str = "4 2\na-b-c\nc-d\n";

/// A wider graph with independent branches and a join.
pub const BRANCHED: &str = "6 3\nsetup-build-test\nsetup-lint\nbuild-package\ntest-release\npackage-release\n";

/// Input whose chains form a two-task cycle.
pub const CYCLIC: &str = "2 1\na-b\nb-a\n";

/// Build a plan, panicking on failure.
pub fn plan(input: &str) -> Plan {
    Plan::build(input).expect("plan should build")
}

/// Fetch a task's priority from a plan.
pub fn priority(plan: &Plan, name: &str) -> u32 {
    plan.graph()
        .get_task(name)
        .unwrap_or_else(|| panic!("task {} missing from plan", name))
        .priority
}

/// Fetch a task's slot from a plan.
pub fn slot(plan: &Plan, name: &str) -> Slot {
    plan.graph()
        .get_task(name)
        .and_then(|task| task.slot)
        .unwrap_or_else(|| panic!("task {} has no slot", name))
}
