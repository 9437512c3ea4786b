//! Ready-made conditions for Marginalia, organized by category:
//! - Variable conditions (comparisons and ranges over variable slots)
//! - Switch conditions (switch slot state)
//! - Actor conditions (equipment, level, named parameters)
//! - Party conditions (membership and inventory)
//!
//! The suite is an independent registration source: it only adds entries to
//! a [`ConditionRegistry`], so hosts can layer their own conditions before
//! or after it, replacing individual names at will.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use marginalia_conditions::ConditionRegistry;

pub mod actors;
pub mod party;
pub mod switches;
pub mod variables;

/// Registers every condition in the suite.
pub fn register_all(registry: &mut ConditionRegistry) {
    variables::register(registry);
    switches::register(registry);
    actors::register(registry);
    party::register(registry);
}

/// Creates a registry pre-populated with the whole suite.
#[must_use]
pub fn standard_registry() -> ConditionRegistry {
    let mut registry = ConditionRegistry::new();
    register_all(&mut registry);
    registry
}
