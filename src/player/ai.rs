use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{CellSet, Coordinate, Grid, ShotOutcome};

use super::Combatant;

/// Automated side: fires uniformly at random at cells it has not tried yet.
///
/// Once a vessel is sunk, the cells around it are known to be water and are
/// remembered as tried as well.
#[derive(Debug, Clone, Default)]
pub struct AiCombatant {
    seen: CellSet,
}

impl AiCombatant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells this combatant will not fire at again.
    pub fn seen(&self) -> CellSet {
        self.seen
    }
}

impl Combatant for AiCombatant {
    fn name(&self) -> &str {
        "computer"
    }

    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        _own: &Grid,
        _opponent: &Grid,
    ) -> anyhow::Result<Coordinate> {
        let untried = self.seen.complement();
        let target = match untried.len() {
            0 => None,
            n => untried.nth(rng.random_range(0..n)),
        }
        .ok_or_else(|| anyhow::anyhow!("every cell has already been targeted"))?;
        self.seen.insert(target);
        Ok(target)
    }

    fn observe(&mut self, _target: Coordinate, outcome: &ShotOutcome, opponent: &Grid) {
        if let Some(vessel) = outcome.sunk_vessel() {
            for c in opponent.contour(vessel) {
                self.seen.insert(c);
            }
        }
    }
}
