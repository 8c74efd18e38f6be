//! Fixed-size field storage with bounds-checked access.
//!
//! The grid is a flat row-major array sized at compile time; it never grows,
//! shrinks, or reallocates after construction.

use tui_life_types::{CellState, FIELD_CELLS, FIELD_COLS, FIELD_ROWS};

/// The 21x67 cell field.
///
/// All positions start `Dead`. Coordinates are signed so that callers doing
/// offset arithmetic (the pattern loader, neighbour scans) can probe
/// out-of-range positions safely: reads outside the field return `None` and
/// writes outside the field are refused.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: [CellState; FIELD_CELLS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new() -> Self {
        Self {
            cells: [CellState::Dead; FIELD_CELLS],
        }
    }

    /// Field height in rows.
    pub fn rows(&self) -> usize {
        FIELD_ROWS
    }

    /// Field width in columns.
    pub fn cols(&self) -> usize {
        FIELD_COLS
    }

    /// Get the state at (row, col), or `None` if outside the field.
    pub fn get(&self, row: i16, col: i16) -> Option<CellState> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set the state at (row, col). Returns `false` if outside the field.
    pub fn set(&mut self, row: i16, col: i16, state: CellState) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Whether the cell at (row, col) is alive. Out-of-range is dead.
    pub fn is_alive(&self, row: i16, col: i16) -> bool {
        self.get(row, col).is_some_and(CellState::is_alive)
    }

    /// Count live neighbours of (row, col), clamped at the field edges.
    ///
    /// No wraparound: an edge cell has fewer than 8 neighbours and a corner
    /// cell has at most 3. The cell itself is not counted.
    pub fn live_neighbours(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < FIELD_ROWS && col < FIELD_COLS);
        let mut count = 0;
        let r_end = (row + 1).min(FIELD_ROWS - 1);
        let c_end = (col + 1).min(FIELD_COLS - 1);
        for r in row.saturating_sub(1)..=r_end {
            for c in col.saturating_sub(1)..=c_end {
                if r == row && c == col {
                    continue;
                }
                if self.cells[r * FIELD_COLS + c].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Full recount of live cells.
    ///
    /// The engine keeps its population counter incrementally; this scan
    /// exists for construction and for cross-checking in tests.
    pub fn live_cells(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u32
    }

    /// Iterate the field row by row.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks_exact(FIELD_COLS)
    }

    /// Copy the cells into a fixed 2D array (for snapshots).
    pub(crate) fn to_rows(&self) -> [[CellState; FIELD_COLS]; FIELD_ROWS] {
        let mut rows = [[CellState::Dead; FIELD_COLS]; FIELD_ROWS];
        for (row, chunk) in rows.iter_mut().zip(self.cells.chunks_exact(FIELD_COLS)) {
            row.copy_from_slice(chunk);
        }
        rows
    }

    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= FIELD_ROWS || col as usize >= FIELD_COLS {
            return None;
        }
        Some(row as usize * FIELD_COLS + col as usize)
    }
}
