//! Line-oriented input sources.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A source of text lines, one per call.
///
/// `Ok(None)` means the source is exhausted. Exhaustion is a distinct signal
/// from any in-band content (in particular from the "done" sentinel) and is
/// surfaced to the caller, never swallowed.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Lines read from standard input.
///
/// Line terminators are stripped; interior and leading whitespace is
/// preserved because pattern geometry depends on it.
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = self.stdin.lock().read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        strip_line_terminator(&mut buf);
        Ok(Some(buf))
    }
}

/// A scripted, in-memory source for tests and deterministic drivers.
pub struct ScriptSource {
    lines: VecDeque<String>,
}

impl ScriptSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

fn strip_line_terminator(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_source_yields_lines_then_none() {
        let mut src = ScriptSource::new(["* *", "done"]);
        assert_eq!(src.next_line().unwrap(), Some("* *".to_string()));
        assert_eq!(src.next_line().unwrap(), Some("done".to_string()));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn terminator_stripping_keeps_inner_whitespace() {
        let mut buf = String::from("  * \r\n");
        strip_line_terminator(&mut buf);
        assert_eq!(buf, "  * ");

        let mut unix = String::from(" *\n");
        strip_line_terminator(&mut unix);
        assert_eq!(unix, " *");

        let mut bare = String::from("done");
        strip_line_terminator(&mut bare);
        assert_eq!(bare, "done");
    }
}
