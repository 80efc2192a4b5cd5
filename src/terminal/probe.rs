//! Terminal dimension probe.
//!
//! Determines `(rows, cols)` by parking the cursor at the bottom-right
//! edge and asking the terminal where it ended up, reading the reply
//! byte-by-byte into a bounded buffer. A direct query via the OS exists
//! below but is deliberately bypassed; the cursor-report fallback is the
//! only exercised path.

use std::io::Write;

use tracing::debug;

use crate::error::FatalTerminalError;
use crate::input::ByteSource;
use crate::render::ansi;

/// Always take the cursor-report fallback, even where the direct OS query
/// would succeed.
const FORCE_CURSOR_PROBE: bool = true;

/// Upper bound on the cursor report length (`ESC[{rows};{cols}R`).
const REPORT_BUF_LEN: usize = 32;

/// Probe the terminal dimensions. Requires raw mode to be active, since
/// the reply to the position query arrives on standard input.
pub fn window_size<W, S>(out: &mut W, input: &mut S) -> Result<(u16, u16), FatalTerminalError>
where
    W: Write,
    S: ByteSource,
{
    if !FORCE_CURSOR_PROBE {
        if let Some((terminal_size::Width(cols), terminal_size::Height(rows))) =
            terminal_size::terminal_size()
        {
            if cols > 0 && rows > 0 {
                return Ok((rows, cols));
            }
        }
    }

    write_out(out, ansi::CURSOR_TO_BOTTOM_RIGHT)?;
    let (rows, cols) = cursor_position(out, input)?;
    debug!(rows, cols, "window size probed via cursor report");
    Ok((rows, cols))
}

/// Ask the terminal for the cursor position and parse the reply.
fn cursor_position<W, S>(out: &mut W, input: &mut S) -> Result<(u16, u16), FatalTerminalError>
where
    W: Write,
    S: ByteSource,
{
    write_out(out, ansi::QUERY_CURSOR_POSITION)?;

    let mut buf = [0u8; REPORT_BUF_LEN];
    let mut len = 0;
    while len < buf.len() {
        match input.read_byte()? {
            Some(b'R') => break,
            Some(byte) => {
                buf[len] = byte;
                len += 1;
            }
            // Reply cut short; whatever arrived is all we get to parse
            None => break,
        }
    }

    parse_cursor_report(&buf[..len]).ok_or(FatalTerminalError::WindowSize)
}

/// Parse `ESC[{rows};{cols}` (terminator already consumed) into two
/// positive integers.
fn parse_cursor_report(report: &[u8]) -> Option<(u16, u16)> {
    let rest = report.strip_prefix(b"\x1b[")?;
    let text = std::str::from_utf8(rest).ok()?;
    let (rows, cols) = text.split_once(';')?;
    let rows: u16 = rows.parse().ok()?;
    let cols: u16 = cols.parse().ok()?;
    if rows == 0 || cols == 0 {
        return None;
    }
    Some((rows, cols))
}

fn write_out<W: Write>(out: &mut W, bytes: &[u8]) -> Result<(), FatalTerminalError> {
    out.write_all(bytes).map_err(FatalTerminalError::Write)?;
    out.flush().map_err(FatalTerminalError::Write)
}
