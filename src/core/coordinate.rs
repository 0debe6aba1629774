//! Grid coordinates.
//!
//! A [`Coordinate`] is a plain `(row, col)` value. It is signed so that
//! neighbour arithmetic can step off the board; range checks belong to the
//! grid, not to the coordinate.

use core::fmt;

/// A `(row, col)` position. Rows are labelled `1..`, columns `A..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The 3×3 block centred on this coordinate, including the coordinate
    /// itself. Entries are not bounds-checked.
    pub fn neighbors(self) -> [Coordinate; 9] {
        let mut out = [self; 9];
        let mut i = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                out[i] = self.offset(dr, dc);
                i += 1;
            }
        }
        out
    }

    /// `true` when the two coordinates touch, diagonals included.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self != other && (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.col) && self.row >= 0 {
            let col = (b'A' + self.col as u8) as char;
            write!(f, "{}{}", col, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}
