//! The editor loop: composition root wiring terminal, input, and
//! rendering into a synchronous render -> decode -> dispatch cycle.

mod state;

pub use state::{EditorState, InputMode, Move};

use std::io::{self, Write};

use tracing::debug;

use crate::error::FatalTerminalError;
use crate::input::{self, ctrl, Key};
use crate::render::{self, ansi};
use crate::terminal::{self, TerminalSession, TtyInput};

/// The key that ends the session (Ctrl-Q).
pub const QUIT_KEY: u8 = ctrl(b'q');

/// Result of dispatching one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep looping
    Continue,
    /// Leave the loop and end the session
    Quit,
}

/// Dispatch one decoded key against the editor state.
///
/// Keys with no mapping in the active mode are ignored: no effect, no
/// error.
pub fn dispatch_key(key: Key, state: &mut EditorState) -> Dispatch {
    match key {
        Key::Literal(QUIT_KEY) => return Dispatch::Quit,

        Key::Left => state.move_cursor(Move::Left),
        Key::Right => state.move_cursor(Move::Right),
        Key::Up => state.move_cursor(Move::Up),
        Key::Down => state.move_cursor(Move::Down),
        Key::PageUp => state.move_cursor(Move::PageUp),
        Key::PageDown => state.move_cursor(Move::PageDown),

        Key::Literal(b'h') if state.mode == InputMode::Vim => state.move_cursor(Move::Left),
        Key::Literal(b'j') if state.mode == InputMode::Vim => state.move_cursor(Move::Down),
        Key::Literal(b'k') if state.mode == InputMode::Vim => state.move_cursor(Move::Up),
        Key::Literal(b'l') if state.mode == InputMode::Vim => state.move_cursor(Move::Right),

        Key::Literal(_) => {}
    }
    Dispatch::Continue
}

/// Run the editor until the quit key or a fatal error.
///
/// Enables raw mode, probes the window size, then loops: render the full
/// frame, decode one key, dispatch it. On quit the screen is cleared, the
/// terminal restored, and `Ok(())` returned; on error the session guard
/// restores the terminal during unwinding of the `?`.
pub fn run(mode: InputMode) -> Result<(), FatalTerminalError> {
    let mut session = TerminalSession::enable()?;
    let mut tty = TtyInput::new();
    let mut out = io::stdout();

    let (rows, cols) = terminal::window_size(&mut out, &mut tty)?;
    let mut state = EditorState::new(rows, cols, mode);
    debug!(rows, cols, ?mode, "editor session started");

    loop {
        render::refresh_screen(&mut out, &state)?;
        let key = input::read_key(&mut tty)?;
        if dispatch_key(key, &mut state) == Dispatch::Quit {
            debug!("quit key pressed");
            clear_screen(&mut out)?;
            session.restore()?;
            return Ok(());
        }
    }
}

/// Erase the whole screen and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> Result<(), FatalTerminalError> {
    out.write_all(ansi::CLEAR_SCREEN)
        .map_err(FatalTerminalError::Write)?;
    out.write_all(ansi::CURSOR_HOME)
        .map_err(FatalTerminalError::Write)?;
    out.flush().map_err(FatalTerminalError::Write)
}
