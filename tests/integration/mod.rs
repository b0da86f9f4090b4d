//! Integration test suite for rondo.
//!
//! These tests exercise the full pipeline from raw input text to a
//! completed plan, covering the properties the planner guarantees:
//! dependency-respecting priorities, dense executor packing, and
//! all-or-nothing failure on bad input.
//!
//! # Test Categories
//!
//! - `planning`: end-to-end plans and slot layout
//! - `determinism`: identical output across repeated runs
//! - `failures`: error taxonomy for malformed and cyclic input

mod fixtures;

mod determinism;
mod failures;
