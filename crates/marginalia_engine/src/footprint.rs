//! Footprint geometry for annotated objects.
//!
//! Size directives extend an object's rectangular footprint per direction;
//! occupies directives add arbitrary extra cells, letting objects cover
//! non-rectangular shapes. The host asks the footprint which cells the
//! object covers when deciding passability and activation.

use marginalia_foundation::types::{Direction, MovementMode};
use marginalia_foundation::AnnotationSet;

/// The set of map cells an annotated object covers from a given position.
#[derive(Clone, Copy, Debug)]
pub struct Footprint<'a> {
    page: &'a AnnotationSet,
    x: i32,
    y: i32,
}

impl<'a> Footprint<'a> {
    /// Creates a footprint for an object at `(x, y)`.
    #[must_use]
    pub fn new(page: &'a AnnotationSet, x: i32, y: i32) -> Self {
        Self { page, x, y }
    }

    /// The x values the footprint spans at its own position.
    #[must_use]
    pub fn columns(&self) -> Vec<i32> {
        self.columns_from(self.x)
    }

    /// The x values the footprint would span anchored at `x`.
    ///
    /// The anchor column first, then the left extension, then the right.
    #[must_use]
    pub fn columns_from(&self, x: i32) -> Vec<i32> {
        let size = self.page.size_extension;
        let mut columns = vec![x];
        columns.extend((1..=cells(size.left)).map(|i| x - i));
        columns.extend((1..=cells(size.right)).map(|i| x + i));
        columns
    }

    /// The y values the footprint spans at its own position.
    #[must_use]
    pub fn rows(&self) -> Vec<i32> {
        self.rows_from(self.y)
    }

    /// The y values the footprint would span anchored at `y`.
    #[must_use]
    pub fn rows_from(&self, y: i32) -> Vec<i32> {
        let size = self.page.size_extension;
        let mut rows = vec![y];
        rows.extend((1..=cells(size.up)).map(|i| y - i));
        rows.extend((1..=cells(size.down)).map(|i| y + i));
        rows
    }

    /// The absolute cells added by occupies directives.
    #[must_use]
    pub fn extra_cells(&self) -> Vec<(i32, i32)> {
        self.page
            .occupied_offsets
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Whether the footprint covers the cell `(x, y)`.
    ///
    /// A cell is covered if it lies in the extended rectangle or among the
    /// extra occupied cells.
    #[must_use]
    pub fn covers(&self, x: i32, y: i32) -> bool {
        (self.columns().contains(&x) && self.rows().contains(&y))
            || self.extra_cells().contains(&(x, y))
    }

    /// The cells whose passability the host must check for a move.
    ///
    /// `(x, y)` is the cell being moved into. A vertical move must clear
    /// the whole row of columns the footprint spans there; a horizontal
    /// move must clear the whole column of rows.
    #[must_use]
    pub fn entry_cells(&self, x: i32, y: i32, direction: Direction) -> Vec<(i32, i32)> {
        match direction {
            Direction::Up | Direction::Down => {
                self.columns_from(x).into_iter().map(|cx| (cx, y)).collect()
            }
            Direction::Left | Direction::Right => {
                self.rows_from(y).into_iter().map(|cy| (x, cy)).collect()
            }
        }
    }
}

/// Clamps a directive's cell count into signed coordinate space.
fn cells(extension: u32) -> i32 {
    i32::try_from(extension).unwrap_or(i32::MAX)
}

/// Applies an annotation's draw offset to a base screen position.
#[must_use]
pub fn screen_position(page: &AnnotationSet, base_x: i32, base_y: i32) -> (i32, i32) {
    (base_x + page.draw_offset.0, base_y + page.draw_offset.1)
}

/// Terrain class the host should test when moving an annotated object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassabilityRule {
    /// Ordinary ground passability.
    Ground,
    /// Shallow-water passability (boat).
    BoatWater,
    /// Deep-water passability (ship).
    ShipWater,
    /// Everything is passable (airship).
    Unrestricted,
}

/// Maps a movement mode to the terrain class the host should test.
#[must_use]
pub const fn passability_rule(mode: MovementMode) -> PassabilityRule {
    match mode {
        MovementMode::Walking => PassabilityRule::Ground,
        MovementMode::Boat => PassabilityRule::BoatWater,
        MovementMode::Ship => PassabilityRule::ShipWater,
        MovementMode::Flying => PassabilityRule::Unrestricted,
    }
}
