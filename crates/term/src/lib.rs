//! Terminal output module.
//!
//! This is a small, line-oriented rendering layer. The view side is pure
//! (snapshot in, text lines out) and unit-testable; the printer side owns
//! the actual writer and flush discipline.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Reproduce the classic output protocol exactly (header line, then
//!   21 rows of 67 characters, no trailing decoration)

pub mod printer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use printer::ConsolePrinter;
pub use view::{banner, LifeView};
