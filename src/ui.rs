//! Text rendering of a grid.

use alloc::string::String;
use core::fmt::Write;

use crate::core::{Cell, Grid, GRID_SIZE};

/// Symbol for a cell; `reveal` decides whether unhit vessels are visible.
pub fn cell_symbol(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::Occupied if reveal => 'S',
        Cell::Empty if reveal => '.',
        Cell::Occupied | Cell::Empty => '?',
    }
}

/// Render `grid` with column letters across the top and row numbers down the side.
pub fn render(grid: &Grid) -> String {
    let reveal = grid.reveals();
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in grid.rows().iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for &cell in row {
            let _ = write!(out, " {}", cell_symbol(cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// One-line legend matching the symbols used by [`render`].
pub fn legend(reveal: bool) -> &'static str {
    if reveal {
        "Legend: S=Vessel  X=Hit  o=Miss  .=Water"
    } else {
        "Legend: X=Hit  o=Miss  ?=Unknown"
    }
}
