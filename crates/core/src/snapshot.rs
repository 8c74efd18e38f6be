//! Read-only state view handed to renderers.
//!
//! The core imposes no output format; a snapshot only exposes the counters
//! and row-by-row cell states.

use tui_life_types::{CellState, FIELD_COLS, FIELD_ROWS};

use crate::grid::Grid;

/// An immutable copy of the engine state at one observation point.
#[derive(Clone)]
pub struct GridSnapshot {
    generation: u32,
    population: u32,
    rows: [[CellState; FIELD_COLS]; FIELD_ROWS],
}

impl GridSnapshot {
    pub(crate) fn new(grid: &Grid, generation: u32, population: u32) -> Self {
        Self {
            generation,
            population,
            rows: grid.to_rows(),
        }
    }

    /// Generation the snapshot was taken at.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Live-cell count at the snapshot.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Iterate rows top to bottom; each row is the full 67 columns.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState; FIELD_COLS]> {
        self.rows.iter()
    }

    /// State at (row, col), or `None` outside the field.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
