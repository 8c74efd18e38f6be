//! ConsolePrinter: flushes rendered lines to a writer.
//!
//! Output for one generation is staged in an internal byte buffer and
//! written in a single call, so a slow terminal never shows a half-drawn
//! field.

use std::io::{self, Write};

use anyhow::Result;

pub struct ConsolePrinter<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl ConsolePrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Write one line (newline appended) and flush.
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(text.as_bytes());
        self.buf.push(b'\n');
        self.flush_buf()
    }

    /// Write a batch of lines with a single flush.
    pub fn lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buf.clear();
        for line in lines {
            self.buf.extend_from_slice(line.as_ref().as_bytes());
            self.buf.push(b'\n');
        }
        self.flush_buf()
    }

    /// Write text without a newline and flush (input prompts).
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.extend_from_slice(text.as_bytes());
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
