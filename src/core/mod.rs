//! Naval battle engine (no_std + alloc)
//!
//! Grid model, fleet generation, shot resolution and the turn state machine.
//! Rendering, input parsing and the terminal player live outside this module.

pub mod bitboard;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod fleet;
pub mod game;
pub mod grid;
pub mod vessel;

// Re-export commonly used types
pub use bitboard::BitBoard;
pub use common::{GridError, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::{generate_fleet, generate_fleet_with};
pub use game::{MatchController, MatchSummary, Resolution, Side, TurnReport, TurnState};
pub use grid::{Cell, CellSet, Grid};
pub use vessel::{Orientation, Vessel};
