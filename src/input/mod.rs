//! Input decoding.
//!
//! Consumes raw bytes from the terminal and produces logical keys. The
//! decoder is a small state machine over timed single-byte reads; it is
//! kept independent of the tty behind the [`ByteSource`] trait so the
//! decode table can be tested against scripted byte streams.

mod decoder;
mod keys;

pub use decoder::{read_key, ByteSource};
pub use keys::{ctrl, Key, ESC};
