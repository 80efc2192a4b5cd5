//! Terminal control errors.
//!
//! A broken control channel to the terminal cannot be repaired from within
//! the process, so every variant here is fatal: the caller clears the
//! screen, reports the error, and exits. Two conditions are deliberately
//! NOT errors and never reach this type: a timed read returning zero bytes
//! (idle poll, retried) and an unrecognized escape sequence (degrades to a
//! literal ESC key).

use std::io;

/// Fatal failure of the terminal control channel.
#[derive(Debug, thiserror::Error)]
pub enum FatalTerminalError {
    #[error("failed to query terminal attributes: {0}")]
    GetAttributes(#[source] io::Error),

    #[error("failed to apply terminal attributes: {0}")]
    SetAttributes(#[source] io::Error),

    #[error("failed to restore terminal attributes: {0}")]
    RestoreAttributes(#[source] io::Error),

    #[error("failed to read from terminal: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write to terminal: {0}")]
    Write(#[source] io::Error),

    #[error("cursor position report did not yield terminal dimensions")]
    WindowSize,
}
