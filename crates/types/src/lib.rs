//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, input plumbing).
//!
//! # Field Dimensions
//!
//! The simulation runs on the classic fixed console field:
//!
//! - **Rows**: 21 (indexed 0-20)
//! - **Columns**: 67 (indexed 0-66)
//!
//! Dimensions never change after construction; there is no wraparound at the
//! edges (a corner cell has at most 3 neighbours).
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{CellState, FIELD_COLS, FIELD_ROWS};
//!
//! assert_eq!(FIELD_ROWS, 21);
//! assert_eq!(FIELD_COLS, 67);
//!
//! let cell = CellState::Alive;
//! assert!(cell.is_alive());
//! assert_eq!(cell.glyph(), '*');
//! assert_eq!(CellState::Dead.glyph(), ' ');
//! ```

/// Field height in cells (21 rows)
pub const FIELD_ROWS: usize = 21;

/// Field width in cells (67 columns)
pub const FIELD_COLS: usize = 67;

/// Total number of cells in the field
pub const FIELD_CELLS: usize = FIELD_ROWS * FIELD_COLS;

/// Character marking a live cell, both on input and on output
pub const LIVE_GLYPH: char = '*';

/// Character printed for a dead cell
pub const DEAD_GLYPH: char = ' ';

/// Sentinel line (case-insensitive) terminating the pattern input phase
pub const PATTERN_SENTINEL: &str = "done";

/// State of a single cell on the field
///
/// - `Dead`: empty position (printed as a space)
/// - `Alive`: live cell (printed as `'*'`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Whether this cell is alive
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_types::CellState;
    ///
    /// assert!(CellState::Alive.is_alive());
    /// assert!(!CellState::Dead.is_alive());
    /// ```
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Display character for this state (`'*'` alive, `' '` dead)
    pub fn glyph(self) -> char {
        match self {
            CellState::Alive => LIVE_GLYPH,
            CellState::Dead => DEAD_GLYPH,
        }
    }
}

/// A scheduled state change for a single cell within one generation advance.
///
/// Transitions are computed from a read-only view of the current generation
/// and applied as a batch once the full field has been classified, so no cell
/// ever observes a same-step change in a neighbour. They are never persisted
/// past the step that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Field row of the affected cell
    pub row: u8,
    /// Field column of the affected cell
    pub col: u8,
    /// State the cell takes when the batch is applied
    pub to: CellState,
}
