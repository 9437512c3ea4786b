//! Integration tests for the host-facing engine helpers.
//!
//! Tests for footprint geometry, draw offsets, and proximity volume.

mod footprint_tests;
mod proximity_tests;
