//! Core simulation logic - pure, deterministic, and testable
//!
//! This module contains the grid, the pattern loader, and the generation
//! engine. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same pattern always produces the same run
//! - **Testable**: every rule has a direct unit test
//! - **Portable**: can run in any environment (terminal, headless, bench)
//! - **Fast**: the advance hot path allocates nothing
//!
//! # Module Structure
//!
//! - [`grid`]: fixed 21x67 field with bounds-checked access and edge-clamped
//!   neighbour counting
//! - [`loader`]: parses raw pattern lines and centers them on the field
//! - [`engine`]: two-phase generation advance with generation/population
//!   counters
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Rules
//!
//! Standard Conway rules on a bounded, non-toroidal field:
//!
//! - A live cell with fewer than 2 or more than 3 live neighbours dies
//! - A dead cell with exactly 3 live neighbours becomes alive
//! - Everything else keeps its state
//!
//! All transitions within one step are classified against the pre-step grid
//! and committed as a batch, so the order cells are visited in never affects
//! the result.
//!
//! # Example
//!
//! ```
//! use tui_life_core::{loader, LifeEngine};
//!
//! let grid = loader::load(&[" * ", "  *", "***"]).unwrap();
//! let mut engine = LifeEngine::new(grid);
//! assert_eq!(engine.population(), 5);
//!
//! engine.advance();
//! assert_eq!(engine.generation(), 1);
//! assert_eq!(engine.population(), 5); // gliders are population-stable
//! ```

pub mod engine;
pub mod grid;
pub mod loader;
pub mod snapshot;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use engine::LifeEngine;
pub use grid::Grid;
pub use loader::{is_done_sentinel, load, PatternError};
pub use snapshot::GridSnapshot;
