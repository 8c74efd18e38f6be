//! Pacing: the single suspension point between generations.
//!
//! The simulation loop blocks on exactly one call per generation. Swapping
//! the pacer changes how that wait is satisfied (a line of input, a raw
//! keypress, a fixed delay) without touching the advance algorithm.

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::source::LineSource;

/// Outcome of one pacing wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Proceed to the next generation.
    Advance,
    /// The trigger source is gone (EOF, quit key); stop the loop.
    Exhausted,
}

/// Blocks until the next generation should run.
pub trait StepPacer {
    fn wait_for_step(&mut self) -> io::Result<Step>;
}

/// One line of input per generation; content is ignored.
///
/// This is the classic interaction: the user presses Enter to advance.
pub struct LinePacer<S: LineSource> {
    source: S,
}

impl<S: LineSource> LinePacer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: LineSource> StepPacer for LinePacer<S> {
    fn wait_for_step(&mut self) -> io::Result<Step> {
        match self.source.next_line()? {
            Some(_) => Ok(Step::Advance),
            None => Ok(Step::Exhausted),
        }
    }
}

/// One raw-mode keypress per generation.
///
/// Raw mode is only held for the duration of the wait so the surrounding
/// line-oriented output keeps normal terminal behaviour.
pub struct KeyPacer;

impl StepPacer for KeyPacer {
    fn wait_for_step(&mut self) -> io::Result<Step> {
        terminal::enable_raw_mode()?;
        let step = read_key_step();
        let restored = terminal::disable_raw_mode();
        let step = step?;
        restored?;
        Ok(step)
    }
}

fn read_key_step() -> io::Result<Step> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(Step::Exhausted);
            }
            return Ok(Step::Advance);
        }
    }
}

/// Check if a key should end the run.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Fixed-delay pacing; never exhausts.
pub struct TimerPacer {
    delay: Duration,
}

impl TimerPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl StepPacer for TimerPacer {
    fn wait_for_step(&mut self) -> io::Result<Step> {
        thread::sleep(self.delay);
        Ok(Step::Advance)
    }
}
