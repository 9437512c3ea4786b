//! Host-facing helpers derived from parsed annotations.
//!
//! Pure geometry and arithmetic the host consults when applying an
//! [`AnnotationSet`](marginalia_foundation::AnnotationSet) to its own
//! movement, rendering, and audio logic:
//!
//! - [`Footprint`] - which cells an annotated object covers
//! - [`screen_position`] - draw position with the annotation offset applied
//! - [`playback_volume`] - proximity volume for an annotated sound
//! - [`passability_rule`] - terrain class implied by a movement mode
//!
//! Nothing here touches host state; every function recomputes fresh from
//! its inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod footprint;
pub mod proximity;

pub use footprint::{Footprint, PassabilityRule, passability_rule, screen_position};
pub use proximity::{manhattan_distance, playback_volume};
