//! Editor state and clamped cursor movement.

/// Input-dispatch mode, chosen once at startup for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Only the navigation keys move the cursor
    Default,
    /// Literal `h`/`j`/`k`/`l` additionally map to Left/Down/Up/Right
    Vim,
}

/// A cursor movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
    /// One screen height up, clamped at every intermediate step
    PageUp,
    /// One screen height down, clamped at every intermediate step
    PageDown,
}

/// Central editor state.
///
/// Dimensions are fixed at startup for the session's lifetime. The cursor
/// invariant `0 <= cx < cols` and `0 <= cy < rows` holds after every
/// movement; moves at a boundary are no-ops and never wrap.
#[derive(Debug)]
pub struct EditorState {
    /// Screen height in rows, always > 0
    pub rows: u16,
    /// Screen width in columns, always > 0
    pub cols: u16,
    /// Cursor column, 0-based
    pub cx: u16,
    /// Cursor row, 0-based
    pub cy: u16,
    /// Input-dispatch mode for the whole session
    pub mode: InputMode,
}

impl EditorState {
    /// Create a state with the cursor at the top-left corner.
    pub fn new(rows: u16, cols: u16, mode: InputMode) -> Self {
        Self {
            rows,
            cols,
            cx: 0,
            cy: 0,
            mode,
        }
    }

    /// Apply one movement command, clamping at the screen edges.
    pub fn move_cursor(&mut self, movement: Move) {
        match movement {
            Move::Left => self.cx = self.cx.saturating_sub(1),
            Move::Right => {
                if self.cx + 1 < self.cols {
                    self.cx += 1;
                }
            }
            Move::Up => self.cy = self.cy.saturating_sub(1),
            Move::Down => {
                if self.cy + 1 < self.rows {
                    self.cy += 1;
                }
            }
            // A page is exactly one screen height of single steps, so the
            // page size tracks the row count and clamping still applies
            Move::PageUp => {
                for _ in 0..self.rows {
                    self.move_cursor(Move::Up);
                }
            }
            Move::PageDown => {
                for _ in 0..self.rows {
                    self.move_cursor(Move::Down);
                }
            }
        }
    }
}
