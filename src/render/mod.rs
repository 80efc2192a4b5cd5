//! Screen rendering.
//!
//! Organized into submodules:
//! - `ansi`: the control sequences the renderer and terminal layer emit
//! - `frame`: the transient append buffer a frame is assembled into
//! - `screen`: building a full frame and flushing it atomically

pub mod ansi;
mod frame;
mod screen;

pub use frame::Frame;
pub use screen::{draw_frame, refresh_screen, ROW_MARKER, WELCOME};
