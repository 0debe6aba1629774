//! Vessels and their footprint on the grid.

use core::fmt;

use super::coordinate::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, towards higher columns.
    Horizontal,
    /// Extends down the column, towards higher rows.
    Vertical,
}

impl Orientation {
    /// `(row, col)` step between consecutive cells.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A vessel anchored on the grid, tracking its remaining hit points.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    hit_points: usize,
    anchor: Coordinate,
    orientation: Orientation,
}

impl Vessel {
    /// New undamaged vessel of `length` cells starting at `anchor`.
    pub fn new(length: usize, anchor: Coordinate, orientation: Orientation) -> Self {
        Self {
            length,
            hit_points: length,
            anchor,
            orientation,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the vessel, starting at the anchor.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        let anchor = self.anchor;
        (0..self.length as i32).map(move |i| anchor.offset(i * dr, i * dc))
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.occupied_cells().any(|cell| cell == c)
    }

    /// Removes one hit point. Returns `true` if the vessel is now sunk.
    pub fn take_hit(&mut self) -> bool {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.is_sunk()
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, hp: {}, anchor: {}, orientation: {:?} }}",
            self.length, self.hit_points, self.anchor, self.orientation,
        )
    }
}
