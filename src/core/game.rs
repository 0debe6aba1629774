//! Match controller: two grids, two combatants and the turn state machine.

use alloc::boxed::Box;
use core::fmt;

use rand::rngs::SmallRng;

use super::common::{GridError, ShotOutcome};
use super::coordinate::Coordinate;
use super::fleet::generate_fleet;
use super::grid::Grid;
use super::vessel::Vessel;
use crate::player::Combatant;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Automated => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "player"),
            Side::Automated => write!(f, "computer"),
        }
    }
}

/// What a single shot did, as seen by the turn logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Target was off the grid; nothing changed and the turn is kept.
    OutOfBounds,
    Miss,
    Hit,
    Sunk(Vessel),
}

impl Resolution {
    /// Whether the shooter keeps the turn after this resolution.
    pub fn retains_turn(&self) -> bool {
        !matches!(self, Resolution::Miss)
    }
}

impl From<ShotOutcome> for Resolution {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Miss => Resolution::Miss,
            ShotOutcome::Hit => Resolution::Hit,
            ShotOutcome::Sunk(v) => Resolution::Sunk(v),
        }
    }
}

/// States of the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// `side` is about to pick and fire a shot.
    AwaitingShot(Side),
    /// `side`'s shot at `target` has been applied to the opposing grid.
    Resolved {
        side: Side,
        target: Coordinate,
        resolution: Resolution,
    },
    /// The opposing fleet of the winner has been destroyed.
    MatchOver(Side),
}

/// Everything that happened during one call to [`MatchController::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub target: Coordinate,
    pub resolution: Resolution,
    pub next: TurnState,
}

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Side,
    pub turns: usize,
    pub shots_human: usize,
    pub shots_automated: usize,
    pub vessels_left_human: usize,
    pub vessels_left_automated: usize,
}

/// Drives a match from fleet generation to the win condition.
///
/// The controller owns both grids; a combatant only ever sees them by shared
/// reference while choosing a target.
pub struct MatchController {
    grids: [Grid; 2],
    combatants: [Box<dyn Combatant>; 2],
    rng: SmallRng,
    state: TurnState,
    shots: [usize; 2],
    turns: usize,
}

impl MatchController {
    /// Generate both fleets and start with the human side to move.
    ///
    /// The human grid is revealed when rendered, the automated one is not.
    pub fn new(
        human: Box<dyn Combatant>,
        automated: Box<dyn Combatant>,
        mut rng: SmallRng,
    ) -> Result<Self, GridError> {
        let mut human_grid = Grid::new(true);
        let mut automated_grid = Grid::new(false);
        let restarts = generate_fleet(&mut human_grid, &mut rng)?;
        log::debug!("{} fleet generated ({} restarts)", Side::Human, restarts);
        let restarts = generate_fleet(&mut automated_grid, &mut rng)?;
        log::debug!("{} fleet generated ({} restarts)", Side::Automated, restarts);
        Ok(Self::from_grids(human_grid, automated_grid, human, automated, rng))
    }

    /// Start a match over already populated grids.
    pub fn from_grids(
        human_grid: Grid,
        automated_grid: Grid,
        human: Box<dyn Combatant>,
        automated: Box<dyn Combatant>,
        rng: SmallRng,
    ) -> Self {
        Self {
            grids: [human_grid, automated_grid],
            combatants: [human, automated],
            rng,
            state: TurnState::AwaitingShot(Side::Human),
            shots: [0; 2],
            turns: 0,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Grid owned by `side`, i.e. the one its opponent fires at.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    /// Change whether `side`'s unhit vessels are shown when its grid is rendered.
    pub fn set_reveal(&mut self, side: Side, reveal: bool) {
        self.grids[side.index()].set_reveal(reveal);
    }

    pub fn combatant(&self, side: Side) -> &dyn Combatant {
        &*self.combatants[side.index()]
    }

    /// In-bounds shots fired by `side` so far.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::MatchOver(side) => Some(side),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<MatchSummary> {
        let winner = self.winner()?;
        Some(MatchSummary {
            winner,
            turns: self.turns,
            shots_human: self.shots(Side::Human),
            shots_automated: self.shots(Side::Automated),
            vessels_left_human: self.grid(Side::Human).live_vessel_count(),
            vessels_left_automated: self.grid(Side::Automated).live_vessel_count(),
        })
    }

    /// Perform a single state transition and return the new state.
    pub fn advance(&mut self) -> anyhow::Result<TurnState> {
        self.state = match self.state {
            TurnState::AwaitingShot(side) => {
                let (me, them) = (side.index(), side.other().index());
                let target = self.combatants[me].choose_target(
                    &mut self.rng,
                    &self.grids[me],
                    &self.grids[them],
                )?;
                let resolution = match self.grids[them].resolve_shot(target) {
                    Ok(outcome) => {
                        self.shots[me] += 1;
                        self.combatants[me].observe(target, &outcome, &self.grids[them]);
                        Resolution::from(outcome)
                    }
                    Err(err @ GridError::TargetOutOfBounds(_)) => {
                        log::info!("{} fired outside the grid at {}", side, target);
                        self.combatants[me].rejected(target, &err);
                        Resolution::OutOfBounds
                    }
                    Err(err) => return Err(anyhow::anyhow!(err)),
                };
                log::debug!("{} fired at {}: {:?}", side, target, resolution);
                TurnState::Resolved {
                    side,
                    target,
                    resolution,
                }
            }
            TurnState::Resolved {
                side, resolution, ..
            } => {
                self.turns += 1;
                if self.grids[side.other().index()].live_vessel_count() == 0 {
                    TurnState::MatchOver(side)
                } else if self.grids[side.index()].live_vessel_count() == 0 {
                    TurnState::MatchOver(side.other())
                } else if resolution.retains_turn() {
                    TurnState::AwaitingShot(side)
                } else {
                    log::trace!("turn passes to {}", side.other());
                    TurnState::AwaitingShot(side.other())
                }
            }
            over @ TurnState::MatchOver(_) => over,
        };
        Ok(self.state)
    }

    /// Play one complete shot: choose, resolve, and settle whose turn is next.
    ///
    /// Returns `None` once the match is over.
    pub fn play_turn(&mut self) -> anyhow::Result<Option<TurnReport>> {
        if let TurnState::Resolved { .. } = self.state {
            self.advance()?;
        }
        if let TurnState::MatchOver(_) = self.state {
            return Ok(None);
        }
        match self.advance()? {
            TurnState::Resolved {
                side,
                target,
                resolution,
            } => {
                let next = self.advance()?;
                Ok(Some(TurnReport {
                    side,
                    target,
                    resolution,
                    next,
                }))
            }
            other => Err(anyhow::anyhow!("unexpected turn state {:?}", other)),
        }
    }

    /// Play until one fleet is destroyed.
    pub fn run(&mut self) -> anyhow::Result<MatchSummary> {
        while self.play_turn()?.is_some() {}
        self.summary()
            .ok_or_else(|| anyhow::anyhow!("match ended without a winner"))
    }
}
