//! LifeView: maps a `core::GridSnapshot` into text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_life_core::GridSnapshot;
use tui_life_types::CellState;

const TITLE: &str = "LIFE";
const TITLE_INDENT: usize = 34;
const ATTRIBUTION: &str = "CREATIVE COMPUTING  MORRISTOWN, NEW JERSEY";
const ATTRIBUTION_INDENT: usize = 15;
const BANNER_TRAILING_BLANKS: usize = 3;

/// Startup banner: two indented lines followed by blank separation.
pub fn banner() -> Vec<String> {
    let mut lines = vec![indented(TITLE_INDENT, TITLE), indented(ATTRIBUTION_INDENT, ATTRIBUTION)];
    lines.extend(std::iter::repeat_with(String::new).take(BANNER_TRAILING_BLANKS));
    lines
}

fn indented(spaces: usize, text: &str) -> String {
    format!("{:spaces$}{text}", "")
}

/// Formats one generation as its header line plus the full field.
///
/// Glyphs are configurable but default to the classic `'*'` / `' '`.
pub struct LifeView {
    live: char,
    dead: char,
}

impl Default for LifeView {
    fn default() -> Self {
        Self { live: '*', dead: ' ' }
    }
}

impl LifeView {
    pub fn new(live: char, dead: char) -> Self {
        Self { live, dead }
    }

    /// Header line: generation and population counters.
    pub fn header(&self, snap: &GridSnapshot) -> String {
        format!(
            "GENERATION: {}          POPULATION: {}",
            snap.generation(),
            snap.population()
        )
    }

    /// Render a snapshot into an existing line buffer.
    ///
    /// Emits the header followed by exactly one line per field row, each
    /// exactly one character per column with no trailing decoration. Callers
    /// can reuse the buffer across generations.
    pub fn render_into(&self, snap: &GridSnapshot, lines: &mut Vec<String>) {
        lines.clear();
        lines.push(self.header(snap));
        for row in snap.rows() {
            let mut text = String::with_capacity(row.len());
            for cell in row {
                text.push(match cell {
                    CellState::Alive => self.live,
                    CellState::Dead => self.dead,
                });
            }
            lines.push(text);
        }
    }

    /// Convenience wrapper around [`LifeView::render_into`].
    pub fn render(&self, snap: &GridSnapshot) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_into(snap, &mut lines);
        lines
    }
}
