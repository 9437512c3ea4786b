//! Core types for the Marginalia annotation system.
//!
//! This crate provides:
//! - [`AnnotationSet`] - The typed configuration parsed from one text block
//! - [`ConditionCall`] - A named predicate invocation with string arguments
//! - [`Error`] - The error type shared by all layers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotation;
pub mod error;
pub mod types;

pub use annotation::AnnotationSet;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use types::{ConditionCall, Direction, MovementMode, SizeExtension, SoundSpec};
