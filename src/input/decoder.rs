//! Escape-sequence decoder.
//!
//! Turns the raw byte stream into logical keys. Recognized sequences:
//!
//! | Bytes            | Key        |
//! |------------------|------------|
//! | `ESC [ A..D`     | Up/Down/Right/Left |
//! | `ESC [ 5 ~`      | PageUp     |
//! | `ESC [ 6 ~`      | PageDown   |
//!
//! Every other sequence degrades to a literal ESC key: an incomplete or
//! unrecognized sequence is never an error. The decoder reads one byte per
//! timed attempt; a timeout while waiting for the first byte is retried
//! indefinitely, while a timeout mid-sequence ends the sequence.

use crate::error::FatalTerminalError;
use crate::input::keys::{Key, ESC};

/// One timed single-byte read from the terminal.
///
/// Implemented by the raw-mode tty reader, and by scripted sources in
/// tests. `Ok(None)` means no byte arrived before the read timeout.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<Option<u8>, FatalTerminalError>;
}

/// Read the next logical key, blocking (in bounded, timed steps) until a
/// byte arrives.
pub fn read_key<S: ByteSource>(source: &mut S) -> Result<Key, FatalTerminalError> {
    let first = loop {
        if let Some(byte) = source.read_byte()? {
            break byte;
        }
        // Zero bytes before timeout is an idle poll, not an error
    };

    if first != ESC {
        return Ok(Key::Literal(first));
    }

    // A lone ESC and an ESC introducing a sequence look identical at
    // first; if the follow-up bytes don't arrive within one read timeout,
    // the user pressed the escape key itself.
    let Some(second) = source.read_byte()? else {
        return Ok(Key::Literal(ESC));
    };
    if second != b'[' {
        return Ok(Key::Literal(ESC));
    }

    let Some(third) = source.read_byte()? else {
        return Ok(Key::Literal(ESC));
    };

    match third {
        b'A' => Ok(Key::Up),
        b'B' => Ok(Key::Down),
        b'C' => Ok(Key::Right),
        b'D' => Ok(Key::Left),
        b'0'..=b'9' => {
            let Some(fourth) = source.read_byte()? else {
                return Ok(Key::Literal(ESC));
            };
            if fourth == b'~' {
                match third {
                    b'5' => Ok(Key::PageUp),
                    b'6' => Ok(Key::PageDown),
                    // No mapping defined for other digits
                    _ => Ok(Key::Literal(ESC)),
                }
            } else {
                Ok(Key::Literal(ESC))
            }
        }
        _ => Ok(Key::Literal(ESC)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::ScriptedSource;

    fn decode(script: &[Option<u8>]) -> Key {
        let mut source = ScriptedSource::new(script);
        read_key(&mut source).unwrap()
    }

    #[test]
    fn plain_byte_is_literal() {
        assert_eq!(decode(&[Some(b'x')]), Key::Literal(b'x'));
    }

    #[test]
    fn control_byte_is_literal() {
        assert_eq!(decode(&[Some(0x11)]), Key::Literal(0x11));
    }

    #[test]
    fn idle_polls_are_retried_until_a_byte_arrives() {
        assert_eq!(decode(&[None, None, None, Some(b'q')]), Key::Literal(b'q'));
    }

    #[test]
    fn arrow_sequences_decode_to_navigation_keys() {
        assert_eq!(decode(&[Some(ESC), Some(b'['), Some(b'A')]), Key::Up);
        assert_eq!(decode(&[Some(ESC), Some(b'['), Some(b'B')]), Key::Down);
        assert_eq!(decode(&[Some(ESC), Some(b'['), Some(b'C')]), Key::Right);
        assert_eq!(decode(&[Some(ESC), Some(b'['), Some(b'D')]), Key::Left);
    }

    #[test]
    fn page_sequences_decode_to_page_keys() {
        assert_eq!(
            decode(&[Some(ESC), Some(b'['), Some(b'5'), Some(b'~')]),
            Key::PageUp
        );
        assert_eq!(
            decode(&[Some(ESC), Some(b'['), Some(b'6'), Some(b'~')]),
            Key::PageDown
        );
    }

    #[test]
    fn unmapped_digit_sequence_degrades_to_esc() {
        assert_eq!(
            decode(&[Some(ESC), Some(b'['), Some(b'9'), Some(b'~')]),
            Key::Literal(ESC)
        );
    }

    #[test]
    fn digit_without_tilde_degrades_to_esc() {
        assert_eq!(
            decode(&[Some(ESC), Some(b'['), Some(b'5'), Some(b'x')]),
            Key::Literal(ESC)
        );
    }

    #[test]
    fn lone_esc_times_out_to_literal_esc() {
        assert_eq!(decode(&[Some(ESC), None]), Key::Literal(ESC));
    }

    #[test]
    fn esc_followed_by_non_bracket_is_literal_esc() {
        assert_eq!(decode(&[Some(ESC), Some(b'O')]), Key::Literal(ESC));
    }

    #[test]
    fn truncated_csi_degrades_to_esc() {
        assert_eq!(decode(&[Some(ESC), Some(b'['), None]), Key::Literal(ESC));
        assert_eq!(
            decode(&[Some(ESC), Some(b'['), Some(b'5'), None]),
            Key::Literal(ESC)
        );
    }

    #[test]
    fn unrecognized_csi_final_byte_degrades_to_esc() {
        assert_eq!(
            decode(&[Some(ESC), Some(b'['), Some(b'Z')]),
            Key::Literal(ESC)
        );
    }

    #[test]
    fn read_error_is_fatal() {
        struct FailingSource;
        impl ByteSource for FailingSource {
            fn read_byte(&mut self) -> Result<Option<u8>, FatalTerminalError> {
                let err = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
                Err(FatalTerminalError::Read(err))
            }
        }
        assert!(read_key(&mut FailingSource).is_err());
    }
}
