//! Input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It provides
//! the two input seams of the simulation: [`LineSource`], a line-oriented
//! text source for the pattern phase, and [`StepPacer`], the single
//! suspension point that paces generation advances. Pacers are drop-in
//! replacements for one another, so a test harness can drive generations
//! deterministically without real input or timing.

pub mod pacer;
pub mod source;

pub use tui_life_types as types;

pub use pacer::{KeyPacer, LinePacer, Step, StepPacer, TimerPacer};
pub use source::{LineSource, ScriptSource, StdinSource};
