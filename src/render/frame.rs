//! Transient append buffer for one output frame.
//!
//! A frame is assembled by successive appends (never edited in place) and
//! flushed to the terminal in a single write, bounding visible tearing to
//! at most one write per cycle. The buffer is discarded after the flush.

/// Append-only byte buffer holding one frame.
#[derive(Debug, Default)]
pub struct Frame {
    buf: Vec<u8>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffer for an expected frame size to avoid regrowth
    /// mid-frame.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
