//! Marginalia - Annotation-tag parser and condition engine
//!
//! This crate re-exports all layers of the Marginalia system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: marginalia_engine     — Footprint, draw offset, proximity helpers
//!          marginalia_suite      — Ready-made condition catalog
//! Layer 2: marginalia_conditions — Registry, evaluator, evaluation context
//! Layer 1: marginalia_parser     — Scope scanner, tag table, parse()
//! Layer 0: marginalia_foundation — Core types (AnnotationSet, Error)
//! ```

pub use marginalia_conditions as conditions;
pub use marginalia_engine as engine;
pub use marginalia_foundation as foundation;
pub use marginalia_parser as parser;
pub use marginalia_suite as suite;
