//! Generation engine: two-phase compute-then-commit advance.

use arrayvec::ArrayVec;

use tui_life_types::{CellState, Transition, FIELD_CELLS, FIELD_COLS, FIELD_ROWS};

use crate::grid::Grid;
use crate::loader::{self, PatternError};
use crate::snapshot::GridSnapshot;

/// Owns the grid and its counters for the lifetime of a simulation.
///
/// `advance` classifies every cell against the pre-step grid, collects the
/// resulting transitions into a fixed-capacity batch, and only then commits
/// them, so a cell never sees a same-step change in a neighbour. The
/// population counter is adjusted per committed transition rather than
/// recounted.
pub struct LifeEngine {
    grid: Grid,
    generation: u32,
    population: u32,
}

impl LifeEngine {
    /// Wrap an initial grid. Population is taken from a one-time scan;
    /// afterwards it is maintained incrementally.
    pub fn new(grid: Grid) -> Self {
        let population = grid.live_cells();
        Self {
            grid,
            generation: 0,
            population,
        }
    }

    /// Convenience: load a pattern and wrap the resulting grid.
    pub fn from_pattern<S: AsRef<str>>(lines: &[S]) -> Result<Self, PatternError> {
        Ok(Self::new(loader::load(lines)?))
    }

    /// Completed generation count (0 before the first advance).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Live cells in the current grid.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Read access to the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only view of the current state for rendering.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(&self.grid, self.generation, self.population)
    }

    /// Advance one generation.
    ///
    /// Total over any grid; a static pattern produces zero transitions but
    /// still increments the generation counter.
    pub fn advance(&mut self) {
        let mut transitions: ArrayVec<Transition, FIELD_CELLS> = ArrayVec::new();

        // Phase 1: classify every cell against the frozen current grid.
        for row in 0..FIELD_ROWS {
            for col in 0..FIELD_COLS {
                let neighbours = self.grid.live_neighbours(row, col);
                let alive = self.grid.is_alive(row as i16, col as i16);
                let to = if alive {
                    if neighbours < 2 || neighbours > 3 {
                        CellState::Dead
                    } else {
                        continue;
                    }
                } else if neighbours == 3 {
                    CellState::Alive
                } else {
                    continue;
                };
                transitions.push(Transition {
                    row: row as u8,
                    col: col as u8,
                    to,
                });
            }
        }

        // Phase 2: commit the batch. Positions are disjoint, so order does
        // not matter.
        for t in &transitions {
            self.grid.set(t.row as i16, t.col as i16, t.to);
            match t.to {
                CellState::Alive => self.population += 1,
                CellState::Dead => self.population -= 1,
            }
        }
        self.generation += 1;
    }
}
