//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_fleet, render, AiCombatant, Combatant, Coordinate, Grid, MatchController,
    Orientation, Resolution, ShotOutcome, Side, TurnState, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, HumanCombatant};
