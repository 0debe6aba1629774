use alloc::vec::Vec;

/// Side length of the square grid.
pub const GRID_SIZE: usize = 6;

/// Number of vessels in the standard fleet.
pub const NUM_VESSELS: usize = 7;

/// Vessel lengths placed by the fleet generator, in placement order.
pub const FLEET: [usize; NUM_VESSELS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of cells occupied by the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random placement attempts allowed per vessel before the board is restarted.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Full-board restarts allowed before fleet generation gives up.
pub const MAX_BOARD_RESTARTS: usize = 1000;

/// Tunables for the fleet generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    /// Vessel lengths, placed in order.
    pub manifest: Vec<usize>,
    /// Attempts per vessel before a full restart.
    pub max_attempts: usize,
    /// Full restarts before `BoardGenerationFailed`.
    pub max_restarts: usize,
}

impl FleetConfig {
    pub fn new(manifest: &[usize]) -> Self {
        Self {
            manifest: manifest.to_vec(),
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    /// Total number of cells the manifest occupies.
    pub fn total_cells(&self) -> usize {
        self.manifest.iter().sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            manifest: FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_restarts: MAX_BOARD_RESTARTS,
        }
    }
}
