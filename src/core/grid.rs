//! Grid state: cell matrix, placement bookkeeping and live vessels.

use alloc::vec::Vec;
use core::fmt;

use super::bitboard::BitBoard;
use super::common::{GridError, ShotOutcome};
use super::config::GRID_SIZE;
use super::coordinate::Coordinate;
use super::vessel::Vessel;

/// Cell set sized for the grid.
pub type CellSet = BitBoard<u64, GRID_SIZE>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
}

/// One side's 6×6 grid.
///
/// A grid starts empty, is populated once by the fleet generator and is
/// afterwards only changed by [`Grid::resolve_shot`].
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    available: CellSet,
    buffer: CellSet,
    vessels: Vec<Vessel>,
    live_count: usize,
    reveal: bool,
}

impl Grid {
    /// Empty grid. `reveal` controls whether unhit vessels are shown when rendered.
    pub fn new(reveal: bool) -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            available: CellSet::full(),
            buffer: CellSet::new(),
            vessels: Vec::new(),
            live_count: 0,
            reveal,
        }
    }

    /// Clear every vessel and all placement bookkeeping, keeping the reveal flag.
    pub fn reset(&mut self) {
        *self = Self::new(self.reveal);
    }

    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        let n = GRID_SIZE as i32;
        !(0..n).contains(&c.row) || !(0..n).contains(&c.col)
    }

    /// Cell state at `c`, or `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        if self.is_out_of_bounds(c) {
            None
        } else {
            Some(self.cells[c.row as usize][c.col as usize])
        }
    }

    fn cell_mut(&mut self, c: Coordinate) -> &mut Cell {
        &mut self.cells[c.row as usize][c.col as usize]
    }

    /// Row-major view of the cell matrix.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// `true` once `c` has been shot at.
    pub fn is_resolved(&self, c: Coordinate) -> bool {
        matches!(self.cell(c), Some(Cell::Hit | Cell::Miss))
    }

    pub fn live_vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn live_vessel_count(&self) -> usize {
        self.live_count
    }

    /// Coordinates still eligible for a new vessel.
    pub fn available_cells(&self) -> CellSet {
        self.available
    }

    /// Coordinates consumed by vessels and their halos.
    pub fn buffer_cells(&self) -> CellSet {
        self.buffer
    }

    pub fn reveals(&self) -> bool {
        self.reveal
    }

    pub fn set_reveal(&mut self, reveal: bool) {
        self.reveal = reveal;
    }

    /// Place `vessel`, reserving its footprint and the one-cell halo around it.
    ///
    /// Fails with [`GridError::PlacementRejected`] without touching the grid
    /// when the vessel does not fit the grid or any footprint cell is not
    /// available.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), GridError> {
        if !self.fits(&vessel) || !vessel.occupied_cells().all(|c| self.available.contains(c)) {
            return Err(GridError::PlacementRejected);
        }

        for c in vessel.occupied_cells() {
            *self.cell_mut(c) = Cell::Occupied;
        }
        self.vessels.push(vessel);
        self.live_count += 1;

        // neighbors() includes the centre, so the footprint is consumed too
        for c in vessel.occupied_cells().flat_map(Coordinate::neighbors) {
            if self.available.remove(c) {
                self.buffer.insert(c);
            }
        }
        log::trace!("placed {:?}, {} cells still available", vessel, self.available.len());
        Ok(())
    }

    /// Length within `1..=GRID_SIZE` and anchor on the grid.
    fn fits(&self, vessel: &Vessel) -> bool {
        (1..=GRID_SIZE).contains(&vessel.length()) && !self.is_out_of_bounds(vessel.anchor())
    }

    /// In-bounds cells touching `vessel`, excluding its own footprint.
    ///
    /// Empty for a vessel that could never be placed on this grid.
    pub fn contour(&self, vessel: &Vessel) -> Vec<Coordinate> {
        if !self.fits(vessel) {
            return Vec::new();
        }
        let halo: CellSet = vessel
            .occupied_cells()
            .flat_map(Coordinate::neighbors)
            .filter(|c| !self.is_out_of_bounds(*c) && !vessel.contains(*c))
            .collect();
        halo.iter().collect()
    }

    /// Fire at `target`.
    ///
    /// Shots at already resolved cells change nothing and report the cell's
    /// existing outcome.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, GridError> {
        let cell = self.cell(target).ok_or(GridError::TargetOutOfBounds(target))?;
        match cell {
            Cell::Hit => Ok(ShotOutcome::Hit),
            Cell::Miss => Ok(ShotOutcome::Miss),
            Cell::Empty => {
                *self.cell_mut(target) = Cell::Miss;
                Ok(ShotOutcome::Miss)
            }
            Cell::Occupied => {
                let idx = self
                    .vessels
                    .iter()
                    .position(|v| v.contains(target))
                    .ok_or(GridError::UnknownVessel(target))?;
                *self.cell_mut(target) = Cell::Hit;
                if self.vessels[idx].take_hit() {
                    let sunk = self.vessels.remove(idx);
                    self.live_count -= 1;
                    log::debug!("{:?} sunk, {} vessels left", sunk, self.live_count);
                    Ok(ShotOutcome::Sunk(sunk))
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid {{\n  live: {},\n  reveal: {},\n  vessels: {:?},\n  available: {:?}\n}}",
            self.live_count, self.reveal, self.vessels, self.available
        )
    }
}
