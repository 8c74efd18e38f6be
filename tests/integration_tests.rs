//! End-to-end tests - scripted input through both phases of the run

use tui_life::core::{is_done_sentinel, LifeEngine};
use tui_life::input::{LinePacer, LineSource, ScriptSource, Step, StepPacer};
use tui_life::term::LifeView;

/// Pattern phase as the binary performs it: collect lines until the
/// sentinel, error on premature end of input.
fn collect_pattern<S: LineSource>(source: &mut S) -> Result<Vec<String>, &'static str> {
    let mut lines = Vec::new();
    loop {
        match source.next_line().map_err(|_| "io")? {
            Some(line) if is_done_sentinel(&line) => return Ok(lines),
            Some(line) => lines.push(line),
            None => return Err("end of input before sentinel"),
        }
    }
}

#[test]
fn test_glider_run_over_scripted_input() {
    // Pattern phase, then four advance triggers.
    let mut source = ScriptSource::new([" * ", "  *", "***", "DONE", "", "", "", ""]);

    let pattern = collect_pattern(&mut source).unwrap();
    let mut engine = LifeEngine::from_pattern(&pattern).unwrap();
    assert_eq!(engine.population(), 5);

    // Same loop shape as the binary: print, advance, wait.
    let view = LifeView::default();
    let mut pacer = LinePacer::new(source);
    let mut generations_printed = 0;
    loop {
        let lines = view.render(&engine.snapshot());
        assert!(lines[0].starts_with("GENERATION:"));
        generations_printed += 1;

        engine.advance();
        // Gliders carry their population forward every step.
        assert_eq!(engine.population(), 5);

        match pacer.wait_for_step().unwrap() {
            Step::Advance => {}
            Step::Exhausted => break,
        }
    }

    // Four triggers plus the initial print.
    assert_eq!(generations_printed, 5);
    assert_eq!(engine.generation(), 5);
}

#[test]
fn test_glider_translates_one_cell_per_four_generations() {
    let mut engine = LifeEngine::from_pattern(&[" * ", "  *", "***"]).unwrap();
    let start = [(9, 33), (10, 34), (11, 32), (11, 33), (11, 34)];

    for _ in 0..4 {
        engine.advance();
    }

    // The canonical glider moves one cell down-right every 4 generations.
    for &(row, col) in &start {
        assert!(engine.grid().is_alive(row + 1, col + 1));
    }
    assert_eq!(engine.population(), 5);
    assert_eq!(engine.generation(), 4);
}

#[test]
fn test_end_of_input_before_sentinel_is_an_error() {
    let mut source = ScriptSource::new([" * ", "***"]);
    assert_eq!(
        collect_pattern(&mut source),
        Err("end of input before sentinel")
    );
}

#[test]
fn test_exhausted_trigger_source_ends_the_run() {
    let source = ScriptSource::new(Vec::<String>::new());
    let mut pacer = LinePacer::new(source);
    assert_eq!(pacer.wait_for_step().unwrap(), Step::Exhausted);
}

#[test]
fn test_empty_pattern_runs() {
    let mut source = ScriptSource::new(["done", ""]);
    let pattern = collect_pattern(&mut source).unwrap();
    assert!(pattern.is_empty());

    let mut engine = LifeEngine::from_pattern(&pattern).unwrap();
    assert_eq!(engine.population(), 0);

    engine.advance();
    assert_eq!(engine.generation(), 1);
    assert_eq!(engine.population(), 0);
}
