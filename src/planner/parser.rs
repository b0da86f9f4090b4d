//! Parser for the dependency-chain input format.
//!
//! The input is a header line `N M` (declared task count and executor
//! capacity) followed by dependency chains, one per line. A chain
//! `a-b-c` declares that `b` depends on `a` and `c` depends on `b`.

use crate::core::TaskGraph;
use crate::error::{Error, Result};
use crate::rlog_debug;

/// Character separating task names within a chain line.
pub const CHAIN_SEPARATOR: char = '-';

/// The parsed input: header values plus the task graph.
///
/// `declared_count` is the header's N, a task-count hint the original
/// format carries but never enforces. `executors` is the header's M.
#[derive(Debug)]
pub struct ParsedInput {
    /// Declared task count from the header (informational).
    pub declared_count: usize,
    /// Executor capacity from the header.
    pub executors: usize,
    /// The dependency graph built from the chain lines.
    pub graph: TaskGraph,
}

/// Parse raw input text into a task graph.
///
/// The first line must contain at least two whitespace-separated
/// non-negative integers. Every following non-blank line is a dependency
/// chain. Blank lines produce no edges but are not an error.
///
/// # Errors
/// Returns `Error::MalformedHeader` if the header line is missing, has
/// fewer than two tokens, or a token is not a valid non-negative integer.
pub fn parse(input: &str) -> Result<ParsedInput> {
    let mut lines = input.lines();

    let header = lines
        .next()
        .ok_or_else(|| Error::MalformedHeader("input is empty".to_string()))?;
    let (declared_count, executors) = parse_header(header)?;

    let mut graph = TaskGraph::new();
    for line in lines {
        parse_chain(&mut graph, line);
    }

    rlog_debug!(
        "Parsed {} task(s), {} dependency edge(s) (declared N={}, M={})",
        graph.task_count(),
        graph.dependency_count(),
        declared_count,
        executors
    );

    Ok(ParsedInput {
        declared_count,
        executors,
        graph,
    })
}

/// Parse the `N M` header line.
fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut tokens = line.split_whitespace();

    let n = tokens
        .next()
        .ok_or_else(|| Error::MalformedHeader("expected two fields, found none".to_string()))?;
    let m = tokens
        .next()
        .ok_or_else(|| Error::MalformedHeader("expected two fields, found one".to_string()))?;

    let n = n.parse::<usize>().map_err(|_| {
        Error::MalformedHeader(format!("task count is not a non-negative integer: {:?}", n))
    })?;
    let m = m.parse::<usize>().map_err(|_| {
        Error::MalformedHeader(format!(
            "executor count is not a non-negative integer: {:?}",
            m
        ))
    })?;

    Ok((n, m))
}

/// Add one chain line's tasks and edges to the graph.
///
/// Empty segments (blank lines, doubled separators, stray whitespace)
/// are skipped rather than creating empty-named tasks.
fn parse_chain(graph: &mut TaskGraph, line: &str) {
    let mut prev = None;
    for name in line.split(CHAIN_SEPARATOR) {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let current = graph.ensure_task(name);
        if let Some(prev) = prev {
            graph.add_dependency(prev, current);
        }
        prev = Some(current);
    }
}
