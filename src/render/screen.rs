//! Full-frame screen rendering.
//!
//! Every cycle rebuilds the frame from scratch: hide cursor, home, one
//! line per screen row (placeholder marker or the centered welcome
//! banner), then reposition and re-show the cursor. The frame is written
//! to the terminal in a single call.

use std::io::Write;

use crate::editor::EditorState;
use crate::error::FatalTerminalError;
use crate::render::ansi;
use crate::render::frame::Frame;

/// Marker drawn at the start of rows with no content.
pub const ROW_MARKER: &[u8] = b"~";

/// Banner shown on the designated welcome row. Fixed at compile time;
/// ASCII only, so byte-wise truncation is safe.
pub const WELCOME: &str = concat!("ked editor -- version ", env!("CARGO_PKG_VERSION"));

fn draw_rows(state: &EditorState, frame: &mut Frame) {
    for y in 0..state.rows {
        if y == state.rows / 3 {
            draw_welcome_row(state, frame);
        } else {
            frame.push_bytes(ROW_MARKER);
        }
        frame.push_bytes(ansi::ERASE_LINE);

        // The last row gets no trailing newline, which would scroll the
        // terminal
        if y < state.rows - 1 {
            frame.push_bytes(b"\r\n");
        }
    }
}

fn draw_welcome_row(state: &EditorState, frame: &mut Frame) {
    let cols = state.cols as usize;
    let shown = &WELCOME[..WELCOME.len().min(cols)];

    let padding = (cols - shown.len()) / 2;
    if padding > 0 {
        frame.push_bytes(ROW_MARKER);
        for _ in 0..padding - 1 {
            frame.push_bytes(b" ");
        }
    }
    frame.push_str(shown);
}

/// Build one complete frame for the current editor state.
pub fn draw_frame(state: &EditorState) -> Frame {
    // Rough upper bound: row content plus per-row control sequences
    let capacity = (state.rows as usize) * (state.cols as usize + 8) + 32;
    let mut frame = Frame::with_capacity(capacity);

    frame.push_bytes(ansi::HIDE_CURSOR);
    frame.push_bytes(ansi::CURSOR_HOME);
    draw_rows(state, &mut frame);
    frame.push_str(&ansi::cursor_position(state.cy + 1, state.cx + 1));
    frame.push_bytes(ansi::SHOW_CURSOR);
    frame
}

/// Render the current state and flush it to `out` in a single write.
pub fn refresh_screen<W: Write>(
    out: &mut W,
    state: &EditorState,
) -> Result<(), FatalTerminalError> {
    let frame = draw_frame(state);
    out.write_all(frame.as_bytes())
        .map_err(FatalTerminalError::Write)?;
    out.flush().map_err(FatalTerminalError::Write)
}
