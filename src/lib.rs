//! ked - terminal-control core for a full-screen editor
//!
//! Provides the foundational layer an interactive editor sits on:
//!
//! - `terminal`: raw-mode session lifecycle with guaranteed restoration,
//!   plus the window-size probe
//! - `input`: decoding raw bytes (including multi-byte escape sequences)
//!   into logical keys
//! - `render`: building one full output frame per cycle and flushing it
//!   with a single write
//! - `editor`: cursor state with clamped movement, and the main
//!   render/decode/dispatch loop
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. The only suspension
//! points are the timed single-byte reads inside the key decoder and the
//! cursor-position round trip inside the window-size probe; both poll with
//! a short bounded timeout instead of blocking indefinitely.
//!
//! The editor loop owns all state explicitly (no globals): it holds the
//! [`terminal::TerminalSession`] guard and an [`editor::EditorState`], and
//! repeats render -> decode one key -> dispatch until the quit key or a
//! fatal error ends the process.

pub mod editor;
pub mod error;
pub mod input;
pub mod render;
pub mod terminal;
pub mod version;

pub use error::FatalTerminalError;
