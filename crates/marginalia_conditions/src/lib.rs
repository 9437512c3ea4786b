//! Condition dispatch for annotated pages.
//!
//! This crate provides:
//! - [`EventContext`] - The opaque accessor conditions read external state
//!   through
//! - [`ConditionRegistry`] - Name → handler mapping with merge-on-replace
//!   registration and short-circuit AND evaluation
//! - [`Args`] - Shared argument-coercion helpers, including the recurring
//!   literal-or-indirect idiom
//!
//! Conditions are pure functions of `(context, arguments)`. The registry is
//! the only mutable state and only changes via explicit registration, which
//! completes at startup before any evaluation begins.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod context;
pub mod registry;

pub use args::Args;
pub use context::{Actor, EventContext, StaticContext};
pub use registry::{ConditionFn, ConditionRegistry};
