//! Pattern loader: raw input lines to a centered initial grid.
//!
//! Patterns use `'*'` for live cells; `'.'` is accepted as an alternative to
//! `' '` for dead cells. The pattern is placed approximately centered on the
//! 21x67 field using the classic offsets (`11 - rows/2`, `33 - cols/2`).

use std::error::Error;
use std::fmt;

use tui_life_types::{CellState, FIELD_COLS, FIELD_ROWS, LIVE_GLYPH, PATTERN_SENTINEL};

use crate::grid::Grid;

/// Vertical anchor of the centering formula (field midline).
const Y_ANCHOR: f32 = 11.0;
/// Horizontal anchor of the centering formula (field midline).
const X_ANCHOR: f32 = 33.0;

/// Rejection of a whole pattern before any grid mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    /// A `'*'` maps outside the 21x67 field once centered.
    ///
    /// `line` and `column` locate the offending character in the input
    /// (1-based, as a user would count them); `row` and `col` are the
    /// computed field coordinates that fell out of range.
    OutOfBounds {
        line: usize,
        column: usize,
        row: i16,
        col: i16,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PatternError::OutOfBounds {
                line,
                column,
                row,
                col,
            } => write!(
                f,
                "pattern does not fit the {FIELD_ROWS}x{FIELD_COLS} field: \
                 '*' at input line {line}, column {column} would land at \
                 ({row}, {col})"
            ),
        }
    }
}

impl Error for PatternError {}

/// Whether a line is the case-insensitive "done" sentinel ending the pattern.
pub fn is_done_sentinel(line: &str) -> bool {
    line.eq_ignore_ascii_case(PATTERN_SENTINEL)
}

/// Parse pattern lines into a centered grid.
///
/// Lines from a "done" sentinel onward are ignored, so callers may pass the
/// raw input sequence or a pre-stripped one. An empty pattern is valid and
/// yields an all-dead grid.
///
/// Fails without touching the grid if any `'*'` would land outside the
/// field; the live-cell count of a successful load equals the number of
/// `'*'` characters in the pattern.
pub fn load<S: AsRef<str>>(lines: &[S]) -> Result<Grid, PatternError> {
    let pattern: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .take_while(|line| !is_done_sentinel(line))
        .collect();

    let rows = pattern.len();
    let cols = pattern.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    // Midline offsets carry a half-cell fraction for even extents; the
    // floor happens after adding the source coordinate, not before.
    let y_min = Y_ANCHOR - rows as f32 / 2.0;
    let x_min = X_ANCHOR - cols as f32 / 2.0;

    // Validate every '*' before the first write so a bad pattern is
    // rejected whole.
    let mut stars: Vec<(i16, i16)> = Vec::new();
    for (y, line) in pattern.iter().enumerate() {
        for (i, ch) in line.chars().enumerate() {
            // Only '*' is live; '.', ' ', and anything else read as dead.
            if ch != LIVE_GLYPH {
                continue;
            }
            // Source columns are 1-based in the offset formula.
            let x = i + 1;
            let row = (y_min + y as f32).floor() as i16;
            let col = (x_min + x as f32).floor() as i16;
            if row < 0 || col < 0 || row as usize >= FIELD_ROWS || col as usize >= FIELD_COLS {
                return Err(PatternError::OutOfBounds {
                    line: y + 1,
                    column: x,
                    row,
                    col,
                });
            }
            stars.push((row, col));
        }
    }

    let mut grid = Grid::new();
    for (row, col) in stars {
        grid.set(row, col, CellState::Alive);
    }
    Ok(grid)
}
