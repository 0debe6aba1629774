//! Parsing of typed targets such as `A1` or `f6`.

use alloc::string::{String, ToString};
use core::fmt;

use crate::core::{Coordinate, GRID_SIZE};

/// Why a typed target was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    /// Needs a column letter followed by a row number.
    TooShort,
    InvalidColumn(char),
    InvalidRow(String),
    RowOutOfRange(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_col = (b'A' + GRID_SIZE as u8 - 1) as char;
        match self {
            InputError::Empty => write!(f, "Empty input"),
            InputError::TooShort => {
                write!(f, "Too short - need column letter and row number (e.g., A5)")
            }
            InputError::InvalidColumn(ch) => {
                write!(f, "Invalid column '{}' - must be a letter A-{}", ch, last_col)
            }
            InputError::InvalidRow(row) => {
                write!(f, "Invalid row '{}' - must be a number 1-{}", row, GRID_SIZE)
            }
            InputError::RowOutOfRange(row) => {
                write!(f, "Row {} out of bounds - must be 1-{}", row, GRID_SIZE)
            }
        }
    }
}

impl core::error::Error for InputError {}

/// Turn a typed target into an in-range coordinate.
///
/// The column letter comes first (case-insensitive), then the 1-based row.
pub fn parse_target(input: &str) -> Result<Coordinate, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(InputError::Empty)?.to_ascii_uppercase();
    let row_str = chars.as_str().trim();
    if row_str.is_empty() {
        return Err(InputError::TooShort);
    }
    if !col_ch.is_ascii_uppercase() || (col_ch as u8 - b'A') as usize >= GRID_SIZE {
        return Err(InputError::InvalidColumn(col_ch));
    }
    let col = (col_ch as u8 - b'A') as i32;
    if !row_str.bytes().all(|b| b.is_ascii_digit()) || row_str.starts_with('0') {
        return Err(InputError::InvalidRow(row_str.to_string()));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| InputError::InvalidRow(row_str.to_string()))?;
    if row == 0 || row > GRID_SIZE {
        return Err(InputError::RowOutOfRange(row));
    }
    Ok(Coordinate::new(row as i32 - 1, col))
}
