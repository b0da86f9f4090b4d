//! Failure-path tests: the error taxonomy and all-or-nothing semantics.

use crate::fixtures::CYCLIC;
use rondo::planner::{leveler, parser, Plan};
use rondo::Error;

#[test]
fn missing_header_token_is_malformed() {
    assert!(matches!(Plan::build("3\n"), Err(Error::MalformedHeader(_))));
}

#[test]
fn empty_input_is_malformed() {
    assert!(matches!(Plan::build(""), Err(Error::MalformedHeader(_))));
}

#[test]
fn non_integer_header_is_malformed() {
    assert!(matches!(
        Plan::build("three 2\na-b\n"),
        Err(Error::MalformedHeader(_))
    ));
}

#[test]
fn malformed_header_aborts_before_any_task_exists() {
    // The parser fails on the header line; chain lines are never reached.
    let err = parser::parse("oops\na-b\n").unwrap_err();
    assert!(matches!(err, Error::MalformedHeader(_)));
}

#[test]
fn cyclic_input_yields_no_plan() {
    let result = Plan::build(CYCLIC);
    match result {
        Err(Error::CyclicDependency { unresolved }) => {
            assert_eq!(unresolved.len(), 2);
        }
        other => panic!("Expected CyclicDependency, got {:?}", other),
    }
}

#[test]
fn cycle_leaves_no_task_with_a_final_priority() {
    let mut parsed = parser::parse(CYCLIC).unwrap();
    let result = leveler::assign_priorities(&mut parsed.graph);
    assert!(result.is_err());

    // Nothing in the cycle was resolved; the whole set is unplannable.
    assert!(parsed.graph.tasks().all(|task| !task.is_resolved()));
    assert!(parsed.graph.tasks().all(|task| !task.is_scheduled()));
}

#[test]
fn indirect_cycle_is_detected() {
    let result = Plan::build("3 1\na-b-c\nc-a\n");
    assert!(matches!(result, Err(Error::CyclicDependency { .. })));
}

#[test]
fn zero_capacity_fails_before_assignment() {
    let result = Plan::build("2 0\na-b\n");
    assert!(matches!(
        result,
        Err(Error::InvalidExecutorCount { count: 0 })
    ));
}

#[test]
fn zero_capacity_override_fails_even_with_valid_header() {
    let result = Plan::build_with_executors("2 4\na-b\n", Some(0));
    assert!(matches!(result, Err(Error::InvalidExecutorCount { .. })));
}

#[test]
fn errors_render_actionable_messages() {
    let header = Plan::build("3\n").unwrap_err();
    assert!(format!("{}", header).starts_with("Malformed header"));

    let cycle = Plan::build(CYCLIC).unwrap_err();
    let msg = format!("{}", cycle);
    assert!(msg.contains("cycle") || msg.contains("Dependency cycle"));
    assert!(msg.contains('a') && msg.contains('b'));

    let capacity = Plan::build("1 0\na\n").unwrap_err();
    assert!(format!("{}", capacity).contains("executor count"));
}
