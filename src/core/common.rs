//! Common types for the grid: errors and shot outcomes.

use core::fmt;

use super::coordinate::Coordinate;
use super::vessel::Vessel;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a vessel that is still afloat.
    Hit,
    /// Shot took the last hit point of a vessel, which is carried here.
    Sunk(Vessel),
}

impl ShotOutcome {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn sunk_vessel(&self) -> Option<&Vessel> {
        match self {
            ShotOutcome::Sunk(v) => Some(v),
            _ => None,
        }
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A vessel cell is off the board, on another vessel or inside a buffer zone.
    PlacementRejected,
    /// A shot was aimed outside the grid.
    TargetOutOfBounds(Coordinate),
    /// Fleet generation hit its restart ceiling.
    BoardGenerationFailed { restarts: usize },
    /// An occupied cell had no live vessel covering it.
    UnknownVessel(Coordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::PlacementRejected => write!(f, "Vessel placement rejected"),
            GridError::TargetOutOfBounds(c) => write!(f, "Target {} is outside the grid", c),
            GridError::BoardGenerationFailed { restarts } => {
                write!(f, "Could not generate a fleet after {} restarts", restarts)
            }
            GridError::UnknownVessel(c) => write!(f, "No live vessel occupies {}", c),
        }
    }
}

impl core::error::Error for GridError {}
