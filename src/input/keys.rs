//! Logical key values.

/// The escape byte that introduces multi-byte control sequences.
pub const ESC: u8 = 0x1b;

/// Map a letter to its control-key byte (Ctrl-Q -> 0x11).
pub const fn ctrl(c: u8) -> u8 {
    c & 0x1f
}

/// A decoded key: either a literal input byte or one of the navigation
/// keys recognized from escape sequences.
///
/// Navigation keys are separate variants so they can never be confused
/// with a literal byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A plain input byte, delivered as-is (control bytes included)
    Literal(u8),
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}
