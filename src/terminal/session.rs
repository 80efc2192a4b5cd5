//! Raw-mode session guard and the timed tty byte reader.

use std::io;
use std::mem;

use tracing::debug;

use crate::error::FatalTerminalError;
use crate::input::ByteSource;

/// Raw-mode terminal session.
///
/// Created by [`TerminalSession::enable`], which captures the current
/// attributes and applies the raw set. The original snapshot is never
/// mutated after capture; [`restore`](TerminalSession::restore) reapplies
/// it exactly. Dropping the session restores as a last resort (errors are
/// ignored there, since `Drop` cannot report them) so the terminal is
/// never left in raw mode.
pub struct TerminalSession {
    /// Attributes as they were before raw mode, restored on teardown
    original: libc::termios,
    restored: bool,
}

impl TerminalSession {
    /// Capture the current terminal attributes and switch to raw mode.
    pub fn enable() -> Result<Self, FatalTerminalError> {
        let original = get_attributes().map_err(FatalTerminalError::GetAttributes)?;

        let mut raw = original;
        raw.c_iflag &= !(libc::ICRNL | libc::IXON | libc::BRKINT | libc::INPCK | libc::ISTRIP);
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
        raw.c_oflag &= !libc::OPOST;
        raw.c_cflag |= libc::CS8;
        // Timed reads: return after 1/10 s even with zero bytes available
        raw.c_cc[libc::VMIN] = 0;
        raw.c_cc[libc::VTIME] = 1;

        set_attributes(&raw).map_err(FatalTerminalError::SetAttributes)?;
        debug!("raw mode enabled");

        Ok(Self {
            original,
            restored: false,
        })
    }

    /// Reapply the original attribute snapshot.
    ///
    /// Failing to restore leaves the terminal unusable, so the error is
    /// fatal rather than retried.
    pub fn restore(&mut self) -> Result<(), FatalTerminalError> {
        if self.restored {
            return Ok(());
        }
        set_attributes(&self.original).map_err(FatalTerminalError::RestoreAttributes)?;
        self.restored = true;
        debug!("terminal attributes restored");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Last-resort restoration on error and panic paths
        let _ = self.restore();
    }
}

fn get_attributes() -> io::Result<libc::termios> {
    // Safety: termios is a plain C struct; tcgetattr fully initializes it
    // on success, and we only read it after checking the return value.
    unsafe {
        let mut attrs: libc::termios = mem::zeroed();
        if libc::tcgetattr(libc::STDIN_FILENO, &mut attrs) == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(attrs)
    }
}

fn set_attributes(attrs: &libc::termios) -> io::Result<()> {
    // TCSAFLUSH: apply after pending output drains, discard unread input
    let rc = unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, attrs) };
    if rc == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Timed single-byte reader over standard input.
///
/// With VMIN=0/VTIME=1 in effect, each `read` returns within ~100 ms;
/// zero bytes is an idle poll, not an error.
#[derive(Debug, Default)]
pub struct TtyInput;

impl TtyInput {
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for TtyInput {
    fn read_byte(&mut self) -> Result<Option<u8>, FatalTerminalError> {
        let mut byte: u8 = 0;
        // Safety: the buffer is a valid single byte owned by this frame
        let n = unsafe {
            libc::read(
                libc::STDIN_FILENO,
                &mut byte as *mut u8 as *mut libc::c_void,
                1,
            )
        };
        match n {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => {
                let err = io::Error::last_os_error();
                // Some platforms report an empty timed read as EAGAIN
                if err.raw_os_error() == Some(libc::EAGAIN) {
                    Ok(None)
                } else {
                    Err(FatalTerminalError::Read(err))
                }
            }
        }
    }
}
