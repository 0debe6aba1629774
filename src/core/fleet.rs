//! Random fleet generation.
//!
//! Vessels are dropped at random available cells in manifest order. A vessel
//! that cannot be placed within the attempt budget, or a board that runs out
//! of available cells, throws the whole board away and starts over from the
//! first manifest entry; single placements are never undone.

use rand::Rng;

use super::common::GridError;
use super::config::FleetConfig;
use super::grid::Grid;
use super::vessel::{Orientation, Vessel};

/// Populate `grid` with the standard fleet.
///
/// Returns the number of full-board restarts that were needed.
pub fn generate_fleet<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<usize, GridError> {
    generate_fleet_with(grid, rng, &FleetConfig::default())
}

/// Populate `grid` with the fleet described by `config`.
///
/// On `BoardGenerationFailed` the grid is left empty.
pub fn generate_fleet_with<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    config: &FleetConfig,
) -> Result<usize, GridError> {
    let mut restarts = 0;
    loop {
        grid.reset();
        if try_place_manifest(grid, rng, config) {
            log::debug!(
                "fleet of {} placed after {} restarts",
                config.manifest.len(),
                restarts
            );
            return Ok(restarts);
        }
        if restarts >= config.max_restarts {
            grid.reset();
            log::warn!("fleet generation gave up after {} restarts", restarts);
            return Err(GridError::BoardGenerationFailed { restarts });
        }
        restarts += 1;
        log::trace!("restarting fleet generation ({})", restarts);
    }
}

/// One pass over the manifest. Returns `false` when the board must restart.
fn try_place_manifest<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, config: &FleetConfig) -> bool {
    for &length in &config.manifest {
        let mut placed = false;
        for _ in 0..config.max_attempts {
            let available = grid.available_cells();
            if available.is_empty() {
                return false;
            }
            let Some(anchor) = available.nth(rng.random_range(0..available.len())) else {
                return false;
            };
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if grid.place_vessel(Vessel::new(length, anchor, orientation)).is_ok() {
                placed = true;
                break;
            }
        }
        if !placed {
            return false;
        }
    }
    true
}
