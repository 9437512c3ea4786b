//! Integration tests for the marginalia_parser crate.
//!
//! Tests for the directive parsing pipeline:
//! - Nested scope scanning
//! - The tag pattern table
//! - Whole-block parsing and its invariants

mod scope_tests;
