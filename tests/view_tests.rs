//! View tests - output protocol formatting

use tui_life::core::{load, LifeEngine};
use tui_life::term::{banner, LifeView};
use tui_life::types::{FIELD_COLS, FIELD_ROWS};

#[test]
fn test_banner_has_two_centered_lines() {
    let lines = banner();
    assert!(lines.len() >= 2);
    assert_eq!(lines[0].trim(), "LIFE");
    assert_eq!(lines[0].len() - lines[0].trim_start().len(), 34);
    assert_eq!(
        lines[1].trim(),
        "CREATIVE COMPUTING  MORRISTOWN, NEW JERSEY"
    );
    assert_eq!(lines[1].len() - lines[1].trim_start().len(), 15);
}

#[test]
fn test_header_format() {
    let engine = LifeEngine::from_pattern(&[" * ", "  *", "***"]).unwrap();
    let view = LifeView::default();
    assert_eq!(
        view.header(&engine.snapshot()),
        "GENERATION: 0          POPULATION: 5"
    );
}

#[test]
fn test_render_shape() {
    let engine = LifeEngine::from_pattern(&[" * ", "  *", "***"]).unwrap();
    let view = LifeView::default();
    let lines = view.render(&engine.snapshot());

    // Header plus exactly one line per field row.
    assert_eq!(lines.len(), 1 + FIELD_ROWS);
    for line in &lines[1..] {
        assert_eq!(line.chars().count(), FIELD_COLS);
        assert!(line.chars().all(|c| c == '*' || c == ' '));
    }

    // Total stars match the population.
    let stars: usize = lines[1..]
        .iter()
        .map(|line| line.chars().filter(|&c| c == '*').count())
        .sum();
    assert_eq!(stars, 5);
}

#[test]
fn test_render_places_cells_at_field_positions() {
    let engine = LifeEngine::from_pattern(&["**", "**"]).unwrap();
    let view = LifeView::default();
    let lines = view.render(&engine.snapshot());

    // Block loads at rows 10-11, cols 33-34; line 0 is the header.
    for field_row in [10, 11] {
        let row: Vec<char> = lines[1 + field_row].chars().collect();
        assert_eq!(row[33], '*');
        assert_eq!(row[34], '*');
        assert_eq!(row[32], ' ');
        assert_eq!(row[35], ' ');
    }
}

#[test]
fn test_render_into_reuses_buffer() {
    let mut engine = LifeEngine::from_pattern(&[" * ", "  *", "***"]).unwrap();
    let view = LifeView::default();
    let mut lines = Vec::new();

    view.render_into(&engine.snapshot(), &mut lines);
    engine.advance();
    view.render_into(&engine.snapshot(), &mut lines);

    assert_eq!(lines.len(), 1 + FIELD_ROWS);
    assert_eq!(lines[0], "GENERATION: 1          POPULATION: 5");
}

#[test]
fn test_custom_glyphs() {
    let grid = load(&["*"]).unwrap();
    let engine = LifeEngine::new(grid);
    let view = LifeView::new('#', '.');
    let lines = view.render(&engine.snapshot());
    assert!(lines[1..].iter().any(|line| line.contains('#')));
    assert!(lines[1..].iter().all(|line| !line.contains('*')));
}
