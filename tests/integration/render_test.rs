//! Frame-structure tests for the standard 24x80 terminal.

use ked::editor::{EditorState, InputMode};
use ked::render::{draw_frame, WELCOME};

fn standard_frame() -> String {
    let state = EditorState::new(24, 80, InputMode::Default);
    String::from_utf8(draw_frame(&state).as_bytes().to_vec()).unwrap()
}

#[test]
fn standard_frame_has_23_row_separators() {
    assert_eq!(standard_frame().matches("\r\n").count(), 23);
}

#[test]
fn standard_frame_erases_every_row() {
    assert_eq!(standard_frame().matches("\x1b[K").count(), 24);
}

#[test]
fn banner_lands_on_row_eight() {
    let text = standard_frame();
    let body = text.strip_prefix("\x1b[?25l\x1b[H").unwrap();
    let banner_row = body.split("\r\n").nth(8).unwrap();
    assert!(banner_row.contains(WELCOME));
}

#[test]
fn banner_row_fits_within_80_columns() {
    let text = standard_frame();
    let body = text.strip_prefix("\x1b[?25l\x1b[H").unwrap();
    let banner_row = body.split("\r\n").nth(8).unwrap();
    let content = banner_row.strip_suffix("\x1b[K").unwrap();
    assert!(content.len() <= 80);

    // Horizontally centered: marker, padding, then the banner text
    let padding = (80 - WELCOME.len()) / 2;
    assert!(content.starts_with('~'));
    assert_eq!(&content[padding..], WELCOME);
}

#[test]
fn frame_restores_cursor_at_origin() {
    assert!(standard_frame().ends_with("\x1b[1;1H\x1b[?25h"));
}
