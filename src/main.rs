//! Interactive Life runner (default binary).
//!
//! Reads a pattern from stdin (terminated by a case-insensitive "done"
//! line), then prints one generation per pacing trigger. The default pacing
//! is the classic one line of input per generation; `--pace key` advances on
//! a raw keypress and `--pace timer:<ms>` free-runs on a fixed delay.

use std::env;
use std::io::Write;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use tui_life::core::{is_done_sentinel, LifeEngine};
use tui_life::input::{KeyPacer, LinePacer, LineSource, Step, StepPacer, StdinSource, TimerPacer};
use tui_life::term::{banner, ConsolePrinter, LifeView};

enum Pacing {
    Line,
    Key,
    Timer(Duration),
}

fn main() -> Result<()> {
    let pacing = parse_args(env::args().skip(1))?;

    let mut printer = ConsolePrinter::stdout();
    let mut source = StdinSource::new();

    printer.lines(banner())?;
    printer.line("ENTER YOUR PATTERN:")?;
    let pattern = read_pattern(&mut source, &mut printer)?;
    let mut engine = LifeEngine::from_pattern(&pattern)?;

    let mut pacer: Box<dyn StepPacer> = match pacing {
        Pacing::Line => Box::new(LinePacer::new(source)),
        Pacing::Key => Box::new(KeyPacer),
        Pacing::Timer(delay) => Box::new(TimerPacer::new(delay)),
    };

    run(&mut engine, pacer.as_mut(), &mut printer)
}

/// Print, advance, wait; stop when the pacer's trigger source is gone.
fn run<W: Write>(
    engine: &mut LifeEngine,
    pacer: &mut dyn StepPacer,
    printer: &mut ConsolePrinter<W>,
) -> Result<()> {
    let view = LifeView::default();
    let mut lines = Vec::new();
    loop {
        view.render_into(&engine.snapshot(), &mut lines);
        printer.lines(&lines)?;
        engine.advance();
        match pacer.wait_for_step()? {
            Step::Advance => {}
            Step::Exhausted => return Ok(()),
        }
    }
}

/// Prompt for pattern lines until the sentinel.
///
/// End of input before the sentinel is a hard error, never treated as
/// equivalent to "done".
fn read_pattern<S: LineSource, W: Write>(
    source: &mut S,
    printer: &mut ConsolePrinter<W>,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        printer.prompt("? ")?;
        match source.next_line()? {
            Some(line) if is_done_sentinel(&line) => return Ok(lines),
            Some(line) => lines.push(line),
            None => bail!("input ended before the DONE sentinel"),
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Pacing> {
    let mut pacing = Pacing::Line;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pace" => {
                let mode = args
                    .next()
                    .ok_or_else(|| anyhow!("--pace requires a value"))?;
                pacing = parse_pace(&mode)?;
            }
            other => bail!("unknown argument: {other} (expected --pace line|key|timer:<ms>)"),
        }
    }
    Ok(pacing)
}

fn parse_pace(mode: &str) -> Result<Pacing> {
    match mode {
        "line" => Ok(Pacing::Line),
        "key" => Ok(Pacing::Key),
        _ => match mode.strip_prefix("timer:") {
            Some(ms) => {
                let ms: u64 = ms
                    .parse()
                    .context("timer delay must be an integer millisecond count")?;
                Ok(Pacing::Timer(Duration::from_millis(ms)))
            }
            None => bail!("unknown pacing mode: {mode} (expected line, key, or timer:<ms>)"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn default_pacing_is_line() {
        assert!(matches!(parse_args(args(&[])).unwrap(), Pacing::Line));
    }

    #[test]
    fn pace_modes_parse() {
        assert!(matches!(
            parse_args(args(&["--pace", "key"])).unwrap(),
            Pacing::Key
        ));
        assert!(matches!(
            parse_args(args(&["--pace", "timer:250"])).unwrap(),
            Pacing::Timer(d) if d == Duration::from_millis(250)
        ));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(parse_args(args(&["--pace"])).is_err());
        assert!(parse_args(args(&["--pace", "fast"])).is_err());
        assert!(parse_args(args(&["--pace", "timer:soon"])).is_err());
        assert!(parse_args(args(&["--frobnicate"])).is_err());
    }
}
