//! ANSI control sequences used for rendering and terminal control.

/// Hide the cursor while a frame is being drawn.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

/// Show the cursor again after a frame is complete.
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Erase from the cursor to the end of the line.
pub const ERASE_LINE: &[u8] = b"\x1b[K";

/// Erase the entire screen.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// Ask the terminal to report the cursor position (reply: `ESC[{r};{c}R`).
pub const QUERY_CURSOR_POSITION: &[u8] = b"\x1b[6n";

/// Park the cursor at the bottom-right edge: cursor-forward and
/// cursor-down movements are clamped at the screen border, so a large
/// count lands on the last cell without scrolling.
pub const CURSOR_TO_BOTTOM_RIGHT: &[u8] = b"\x1b[999C\x1b[999B";

/// Absolute cursor position sequence, 1-based row and column.
pub fn cursor_position(row: u16, col: u16) -> String {
    format!("\x1b[{};{}H", row, col)
}
