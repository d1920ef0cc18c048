//! Textual coordinates: a column letter `A`-`H` and a row digit `1`-`8`, in
//! either order.

use alloc::string::String;
use thiserror::Error;

use crate::common::Coord;
use crate::config::BOARD_SIZE;

const COLUMNS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
const ROWS: [char; BOARD_SIZE] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Errors produced while parsing player input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "input can contain only two characters (a letter A-H and a number 1-8) and spaces, got {0}"
    )]
    TooLong(usize),
    #[error("input should contain exactly one column reference (a letter from A to H)")]
    MissingColumn,
    #[error("input contains more than one column reference")]
    MultipleColumns,
    #[error("input should contain exactly one row reference (a number from 1 to 8)")]
    MissingRow,
    #[error("input contains more than one row reference")]
    MultipleRows,
    #[error("unknown direction {0:?}, expected N, E, S or W")]
    UnknownDirection(String),
}

/// Parse a coordinate such as `"A2"`, `"2a"` or `" a 2 "` into `(row, col)`.
pub fn parse_coord(text: &str) -> Result<Coord, ParseError> {
    let chars = text.chars().filter(|c| !c.is_whitespace());
    let mut len = 0;
    let mut column = None;
    let mut row = None;
    let mut extra_column = false;
    let mut extra_row = false;

    for ch in chars {
        len += 1;
        let upper = ch.to_ascii_uppercase();
        if let Some(idx) = COLUMNS.iter().position(|&c| c == upper) {
            extra_column |= column.replace(idx).is_some();
        } else if let Some(idx) = ROWS.iter().position(|&r| r == ch) {
            extra_row |= row.replace(idx).is_some();
        }
    }

    if len > 2 {
        return Err(ParseError::TooLong(len));
    }
    if extra_column {
        return Err(ParseError::MultipleColumns);
    }
    if extra_row {
        return Err(ParseError::MultipleRows);
    }
    let column = column.ok_or(ParseError::MissingColumn)?;
    let row = row.ok_or(ParseError::MissingRow)?;
    Ok((row, column))
}

/// Render a coordinate in the canonical `A1` form.
pub fn format_coord((row, col): Coord) -> String {
    let mut out = String::with_capacity(2);
    out.push(COLUMNS.get(col).copied().unwrap_or('?'));
    out.push(ROWS.get(row).copied().unwrap_or('?'));
    out
}
