//! The parsed configuration for one annotated text block.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ConditionCall, MovementMode, SizeExtension, SoundSpec};

/// The typed configuration parsed from one text block.
///
/// An annotation set is fully determined by a single parse pass over its
/// source text: parsing the same text twice from a fresh default produces
/// field-for-field identical sets, and parsing never touches shared state.
/// Once produced, the set is an effectively-immutable value; evaluation only
/// reads it.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotationSet {
    /// Pixel offset applied to the draw position, per axis, last write wins.
    pub draw_offset: (i32, i32),
    /// Per-direction footprint extension, last write per direction wins.
    pub size_extension: SizeExtension,
    /// Extra occupied cell offsets, accumulated in directive order.
    pub occupied_offsets: Vec<(i32, i32)>,
    /// Condition calls gating eligibility, accumulated in directive order.
    pub condition_calls: Vec<ConditionCall>,
    /// Whether this object blocks others regardless of priority.
    pub blocks_others: bool,
    /// How the object moves; defaults to walking.
    pub movement_mode: MovementMode,
    /// Proximity sound, if any; last write wins.
    pub sound_spec: Option<SoundSpec>,
}

impl AnnotationSet {
    /// Creates an annotation set with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no directive touched this set.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}
