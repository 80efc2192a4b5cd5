//! End-to-end cursor behavior: decoded key sequences driven through the
//! dispatcher, checked against the clamped-movement contract.

use ked::editor::{dispatch_key, Dispatch, EditorState, InputMode};
use ked::input::{read_key, ByteSource};
use ked::FatalTerminalError;

/// Byte stream source feeding a fixed sequence, then timing out forever.
struct Stream(Vec<u8>, usize);

impl Stream {
    fn new(bytes: &[u8]) -> Self {
        Self(bytes.to_vec(), 0)
    }
}

impl ByteSource for Stream {
    fn read_byte(&mut self) -> Result<Option<u8>, FatalTerminalError> {
        let byte = self.0.get(self.1).copied();
        self.1 += 1;
        Ok(byte)
    }
}

/// Decode every key from `bytes` and dispatch it, stopping on quit.
fn drive(state: &mut EditorState, bytes: &[u8]) -> Dispatch {
    let mut stream = Stream::new(bytes);
    while stream.1 < stream.0.len() {
        let key = read_key(&mut stream).unwrap();
        if dispatch_key(key, state) == Dispatch::Quit {
            return Dispatch::Quit;
        }
    }
    Dispatch::Continue
}

#[test]
fn arrow_sequences_move_the_cursor() {
    let mut state = EditorState::new(24, 80, InputMode::Default);
    // Right, right, down: ESC[C ESC[C ESC[B
    drive(&mut state, b"\x1b[C\x1b[C\x1b[B");
    assert_eq!((state.cx, state.cy), (2, 1));
}

#[test]
fn page_down_sequence_jumps_to_last_row() {
    let mut state = EditorState::new(24, 80, InputMode::Default);
    drive(&mut state, b"\x1b[6~");
    assert_eq!(state.cy, 23);
}

#[test]
fn left_at_origin_stays_put() {
    let mut state = EditorState::new(24, 80, InputMode::Default);
    drive(&mut state, b"\x1b[D\x1b[D\x1b[A");
    assert_eq!((state.cx, state.cy), (0, 0));
}

#[test]
fn vim_letters_move_in_vim_mode_only() {
    let mut vim = EditorState::new(24, 80, InputMode::Vim);
    drive(&mut vim, b"lljh");
    assert_eq!((vim.cx, vim.cy), (1, 1));

    let mut plain = EditorState::new(24, 80, InputMode::Default);
    drive(&mut plain, b"lljh");
    assert_eq!((plain.cx, plain.cy), (0, 0));
}

#[test]
fn unmapped_page_digit_is_ignored_as_esc() {
    let mut state = EditorState::new(24, 80, InputMode::Default);
    // ESC[9~ has no mapping and degrades to a literal ESC, which the
    // dispatcher ignores
    assert_eq!(drive(&mut state, b"\x1b[9~"), Dispatch::Continue);
    assert_eq!((state.cx, state.cy), (0, 0));
}

#[test]
fn quit_byte_wins_at_any_position() {
    let mut state = EditorState::new(24, 80, InputMode::Default);
    drive(&mut state, b"\x1b[C\x1b[B");
    assert_eq!(drive(&mut state, &[0x11]), Dispatch::Quit);
}
