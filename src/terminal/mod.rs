//! Terminal session control.
//!
//! Owns the raw-mode lifecycle: capture the original termios attributes,
//! apply a raw attribute set for the session, and restore the original
//! snapshot exactly on every exit path. Restoration is guaranteed by
//! `Drop`, so a fatal error or panic anywhere in the editor loop still
//! leaves the terminal usable.
//!
//! Raw here means: no canonical line buffering, no echo, no signal keys,
//! no software flow control, no CR/NL translation, no output
//! post-processing, 8-bit characters, and reads that return after ~100 ms
//! even with no byte available.

mod probe;
mod session;

pub use probe::window_size;
pub use session::{TerminalSession, TtyInput};
