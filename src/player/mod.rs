//! Combatants: the shot-choosing side of a match.
//!
//! - `AiCombatant`: uniform random fire at untried cells
//! - `HumanCombatant`: reads targets from a line-based terminal

use rand::rngs::SmallRng;

use crate::core::{Coordinate, Grid, GridError, ShotOutcome};

/// Interface implemented by both sides of a match.
pub trait Combatant {
    /// Label used in logs and messages.
    fn name(&self) -> &str;

    /// Pick the next target on `opponent`. `own` is this side's grid.
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        own: &Grid,
        opponent: &Grid,
    ) -> anyhow::Result<Coordinate>;

    /// Inform the combatant of the outcome of its last shot.
    fn observe(&mut self, _target: Coordinate, _outcome: &ShotOutcome, _opponent: &Grid) {}

    /// Inform the combatant that its last target was refused; it keeps the turn.
    fn rejected(&mut self, _target: Coordinate, _err: &GridError) {}
}

pub mod ai;
pub use ai::AiCombatant;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::HumanCombatant;
