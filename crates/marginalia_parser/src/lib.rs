//! Directive parser for annotated text blocks.
//!
//! This crate transforms free-form comment text like
//!
//! ```text
//! <Adjusted X: -5>
//! <Left Size: 2>
//! <Condition: switch(1,true), var_==(2,5)>
//! ```
//!
//! into an [`AnnotationSet`] the host and the condition engine consume.
//!
//! # Architecture
//!
//! ```text
//! raw text block
//!       │  one line at a time
//!       ▼
//! ┌─────────────────┐
//! │  TAG TABLE      │  fixed (pattern → handler) pairs
//! └─────────────────┘
//!       │  condition payloads only
//!       ▼
//! ┌─────────────────┐
//! │  SCOPE SCANNER  │  isolates each name(args) call, commas and all
//! └─────────────────┘
//!       │
//!       ▼
//!  AnnotationSet
//! ```
//!
//! Parsing is permissive: a line matching no directive shape is ignored, and
//! a malformed directive simply leaves its field at the default. Absence of
//! annotations is a valid state, not an error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod scope;
pub mod tag;

pub use marginalia_foundation::AnnotationSet;
pub use scope::{Scope, scan};
pub use tag::{TagTable, parse};
