//! Component types of a parsed annotation set.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Direction
// =============================================================================

/// A direction a footprint can be extended in, or a move can be made in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward negative x.
    Left,
    /// Toward positive x.
    Right,
    /// Toward negative y.
    Up,
    /// Toward positive y.
    Down,
}

impl Direction {
    /// Parses a direction name as authored in a size directive.
    ///
    /// Accepts the full word or its single-letter alias, case-insensitively.
    /// Unknown words yield `None` so the caller can ignore the directive.
    #[must_use]
    pub fn from_alias(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "left" | "l" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            "up" | "u" => Some(Self::Up),
            "down" | "d" => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// SizeExtension
// =============================================================================

/// Per-direction footprint extension, in whole cells.
///
/// All directions default to zero; each is set independently by its own
/// directive, last write per direction winning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SizeExtension {
    /// Extra cells to the left.
    pub left: u32,
    /// Extra cells to the right.
    pub right: u32,
    /// Extra cells upward.
    pub up: u32,
    /// Extra cells downward.
    pub down: u32,
}

impl SizeExtension {
    /// Returns the extension in the given direction.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Sets the extension in the given direction.
    pub const fn set(&mut self, direction: Direction, cells: u32) {
        match direction {
            Direction::Left => self.left = cells,
            Direction::Right => self.right = cells,
            Direction::Up => self.up = cells,
            Direction::Down => self.down = cells,
        }
    }

    /// Returns true if no direction is extended.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0 && self.up == 0 && self.down == 0
    }
}

// =============================================================================
// MovementMode
// =============================================================================

/// How the annotated object moves across the host's map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MovementMode {
    /// Ordinary ground movement (the default).
    #[default]
    Walking,
    /// Moves like a boat (shallow water).
    Boat,
    /// Moves like a ship (deep water).
    Ship,
    /// Moves like an airship (ignores terrain).
    Flying,
}

impl MovementMode {
    /// Parses a mode name as authored in a movement directive.
    ///
    /// Case-insensitive; `Fly` selects [`MovementMode::Flying`].
    #[must_use]
    pub fn from_tag(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "boat" => Some(Self::Boat),
            "ship" => Some(Self::Ship),
            "fly" => Some(Self::Flying),
            _ => None,
        }
    }
}

impl fmt::Display for MovementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Walking => "walking",
            Self::Boat => "boat",
            Self::Ship => "ship",
            Self::Flying => "flying",
        };
        write!(f, "{name}")
    }
}

// =============================================================================
// SoundSpec
// =============================================================================

/// A proximity sound attached to an annotated object.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SoundSpec {
    /// Audio clip name (filename stem, no extension).
    pub clip: String,
    /// Loudest the clip may play, in host volume units.
    pub max_volume: i32,
    /// Farthest distance at which the clip is still audible.
    pub max_distance: i32,
}

// =============================================================================
// ConditionCall
// =============================================================================

/// A single named predicate invocation extracted from a condition directive.
///
/// Arguments are untyped at parse time; each condition handler owns the
/// coercion of its own arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionCall {
    /// The condition name to look up in the registry.
    pub name: String,
    /// Ordered positional arguments, as authored.
    pub args: Vec<String>,
}

impl ConditionCall {
    /// Creates a condition call.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

impl fmt::Display for ConditionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(","))
    }
}
