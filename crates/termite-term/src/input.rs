// SPDX-License-Identifier: MIT
//
// Terminal key decoder.
//
// Turns a stream of raw stdin bytes into logical key events, one key per
// call. Handles the legacy encodings a terminal in raw mode produces
// without any protocol negotiation:
//
// - Printable ASCII and control bytes (Ctrl+letter arrives as 0x01-0x1A)
// - CSI sequences (`ESC [`), with optional numeric parameters and the
//   xterm modifier parameter (`ESC [ 1 ; 5 C` is Ctrl+Right)
// - `~`-terminated editing keys (`ESC [ 3 ~` is Delete)
// - SS3 sequences (`ESC O A`, sent by terminals in application cursor mode)
//
// # Design
//
// Unlike a chunk parser, the decoder pulls bytes one at a time from a
// blocking [`ByteSource`]. Each call to [`KeyDecoder::read_key`] runs a
// small state machine from `Idle` until exactly one key is resolved:
//
// ```text
// Idle ──ESC──▶ AwaitIntroducer ──'['──▶ AwaitCsiBody ──letter──▶ key
//                     │                      │
//                     └──'O'──▶ AwaitSs3Final └─digit─▶ Params ──'~'|letter──▶ key
// ```
//
// The byte source has a short idle timeout. A timeout right after ESC
// means the user pressed Escape on its own; a timeout in the middle of a
// parameter list means the sequence was truncated and decodes as
// `KeyCode::Unknown`. The decoder never blocks forever inside a sequence
// and never fails: malformed input always degrades to `Escape` or
// `Unknown`.

use bitflags::bitflags;
use tracing::trace;

use crate::source::{ByteSource, ReadByte};

// ─── Key Types ──────────────────────────────────────────────────────────────

/// A decoded key with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// Which key was pressed.
    pub code: KeyCode,
    /// Active modifier keys (Shift, Alt, Ctrl).
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key with explicit modifiers.
    #[inline]
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key with no modifiers.
    #[inline]
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }

    /// Ctrl + a letter, as produced by control bytes 0x01-0x1A.
    #[inline]
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch), Modifiers::CTRL)
    }

    /// True when this is Ctrl + `ch` with no other modifiers.
    #[inline]
    #[must_use]
    pub fn is_ctrl(self, ch: char) -> bool {
        self.code == KeyCode::Char(ch) && self.modifiers == Modifiers::CTRL
    }

    /// True when Shift is held.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// True when Ctrl is held.
    #[inline]
    #[must_use]
    pub const fn control(self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Identity of a key.
///
/// Printable characters use [`Char`](KeyCode::Char). Named keys have
/// dedicated variants. Anything the decoder could not make sense of is
/// [`Unknown`](KeyCode::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable ASCII character, or the letter of a Ctrl combination.
    Char(char),
    // ── Named keys ──────────────────────────────────────────────
    Enter,
    Tab,
    Backspace,
    Escape,
    Delete,
    Insert,
    // ── Navigation ──────────────────────────────────────────────
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    // ── Function keys ───────────────────────────────────────────
    /// F1 through F12.
    F(u8),
    /// Malformed, truncated, or unrecognised input.
    ///
    /// Terminals sometimes split one escape sequence across reads, so an
    /// `Unknown` key is often the tail of a real keypress. Consumers must
    /// treat it as inert.
    Unknown,
}

impl KeyCode {
    /// True for cursor-movement keys: arrows, Home/End, Page Up/Down.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::Up
                | Self::Down
                | Self::Left
                | Self::Right
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }
}

bitflags! {
    /// Keyboard modifier flags.
    ///
    /// Bit layout follows the xterm CSI modifier encoding, where the
    /// parameter on the wire is `1 + bitmask`: 2 = Shift, 3 = Alt,
    /// 5 = Ctrl, 6 = Ctrl+Shift.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const CTRL  = 0b0000_0100;
    }
}

// ─── Decoder ────────────────────────────────────────────────────────────────

const ESC: u8 = 0x1B;

/// Most CSI parameters we track. Sequences carrying more decode as unknown.
const MAX_PARAMS: usize = 2;

/// Where the decoder is inside an escape sequence.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Waiting for the first byte of a key.
    Idle,
    /// Saw ESC; waiting for `[`, `O`, or a timeout.
    AwaitIntroducer,
    /// Saw `ESC [`; waiting for a final letter or the first digit.
    AwaitCsiBody,
    /// Inside the numeric parameter list of a CSI sequence.
    Params(CsiParams),
    /// Malformed CSI; discard bytes up to the final byte.
    Discard,
    /// Saw `ESC O`; waiting for the final letter.
    AwaitSs3Final,
}

/// Numeric CSI parameters accumulated so far.
#[derive(Debug, Clone, Copy)]
struct CsiParams {
    values: [u16; MAX_PARAMS],
    /// Index of the parameter currently receiving digits.
    current: usize,
}

impl CsiParams {
    fn starting_with(digit: u8) -> Self {
        let mut params = Self {
            values: [0; MAX_PARAMS],
            current: 0,
        };
        params.push_digit(digit);
        params
    }

    fn push_digit(&mut self, digit: u8) {
        let slot = &mut self.values[self.current];
        *slot = slot
            .saturating_mul(10)
            .saturating_add(u16::from(digit - b'0'));
    }

    /// Move on to the next parameter. Returns `false` when there is no room.
    fn next_param(&mut self) -> bool {
        if self.current + 1 >= MAX_PARAMS {
            return false;
        }
        self.current += 1;
        true
    }

    const fn first(&self) -> u16 {
        self.values[0]
    }

    /// The modifier parameter, if a second parameter was given.
    const fn modifiers(&self) -> Modifiers {
        if self.current == 0 {
            Modifiers::empty()
        } else {
            decode_modifiers(self.values[1])
        }
    }
}

/// Pulls bytes from a [`ByteSource`] and decodes them into keys.
///
/// # Example
///
/// ```
/// use termite_term::input::{KeyCode, KeyDecoder, KeyEvent, Modifiers};
/// use termite_term::source::ScriptedSource;
///
/// let mut keys = KeyDecoder::new(ScriptedSource::from_bytes(b"a\x1b[1;5C"));
/// assert_eq!(keys.read_key(), Some(KeyEvent::plain(KeyCode::Char('a'))));
/// assert_eq!(
///     keys.read_key(),
///     Some(KeyEvent::new(KeyCode::Right, Modifiers::CTRL))
/// );
/// assert_eq!(keys.read_key(), None);
/// ```
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    /// Wrap a byte source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Block until one logical key is decoded.
    ///
    /// Idle timeouts before the first byte are retried. Returns `None`
    /// only when the source reaches end-of-stream between keys; a stream
    /// that ends in the middle of a sequence still yields a key
    /// (`Escape` or `Unknown`).
    pub fn read_key(&mut self) -> Option<KeyEvent> {
        let mut state = State::Idle;

        loop {
            let read = self.source.read_byte();
            state = match (state, read) {
                (State::Idle, ReadByte::Timeout) => State::Idle,
                (State::Idle, ReadByte::Eof) => return None,
                (State::Idle, ReadByte::Byte(ESC)) => State::AwaitIntroducer,
                (State::Idle, ReadByte::Byte(b)) => return Some(decode_byte(b)),

                // A lone ESC, or ESC + introducer cut short: the user
                // pressed Escape.
                (
                    State::AwaitIntroducer | State::AwaitCsiBody | State::AwaitSs3Final,
                    ReadByte::Timeout | ReadByte::Eof,
                ) => return Some(KeyEvent::plain(KeyCode::Escape)),

                (State::AwaitIntroducer, ReadByte::Byte(b'[')) => State::AwaitCsiBody,
                (State::AwaitIntroducer, ReadByte::Byte(b'O')) => State::AwaitSs3Final,
                (State::AwaitIntroducer, ReadByte::Byte(b)) => {
                    return Some(unknown("escape", b));
                }

                (State::AwaitSs3Final, ReadByte::Byte(b)) => return Some(decode_ss3(b)),

                (State::AwaitCsiBody, ReadByte::Byte(b)) if b.is_ascii_digit() => {
                    State::Params(CsiParams::starting_with(b))
                }
                (State::AwaitCsiBody, ReadByte::Byte(b)) if is_csi_final(b) => {
                    return Some(decode_csi_final(b, Modifiers::empty()));
                }
                (State::AwaitCsiBody, ReadByte::Byte(_)) => State::Discard,

                // Truncated parameter list.
                (State::Params(_) | State::Discard, ReadByte::Timeout | ReadByte::Eof) => {
                    return Some(KeyEvent::plain(KeyCode::Unknown));
                }

                (State::Params(mut params), ReadByte::Byte(b)) => match b {
                    b'0'..=b'9' => {
                        params.push_digit(b);
                        State::Params(params)
                    }
                    b';' => {
                        if params.next_param() {
                            State::Params(params)
                        } else {
                            State::Discard
                        }
                    }
                    b'~' => return Some(decode_tilde(params)),
                    b if is_csi_final(b) => {
                        return Some(decode_csi_final(b, params.modifiers()));
                    }
                    _ => State::Discard,
                },

                (State::Discard, ReadByte::Byte(b)) if is_csi_final(b) => {
                    return Some(unknown("csi", b));
                }
                (State::Discard, ReadByte::Byte(_)) => State::Discard,
            };
        }
    }
}

impl<S: ByteSource> Iterator for KeyDecoder<S> {
    type Item = KeyEvent;

    fn next(&mut self) -> Option<KeyEvent> {
        self.read_key()
    }
}

// ─── Stateless Decoding ─────────────────────────────────────────────────────

/// Decode a byte that arrived without an escape prefix.
fn decode_byte(b: u8) -> KeyEvent {
    match b {
        0x09 => KeyEvent::plain(KeyCode::Tab),
        0x0A | 0x0D => KeyEvent::plain(KeyCode::Enter),
        0x08 | 0x7F => KeyEvent::plain(KeyCode::Backspace),
        0x00 => KeyEvent::ctrl('@'),
        0x01..=0x1A => KeyEvent::ctrl(char::from(b - 1 + b'a')),
        0x20..=0x7E => KeyEvent::plain(KeyCode::Char(char::from(b))),
        _ => unknown("byte", b),
    }
}

/// CSI final bytes live in 0x40..=0x7E.
const fn is_csi_final(b: u8) -> bool {
    matches!(b, 0x40..=0x7E)
}

/// Decode the letter that terminates a CSI sequence.
fn decode_csi_final(b: u8, modifiers: Modifiers) -> KeyEvent {
    let code = match b {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'P' => KeyCode::F(1),
        b'Q' => KeyCode::F(2),
        b'R' => KeyCode::F(3),
        b'S' => KeyCode::F(4),
        b'Z' => return KeyEvent::new(KeyCode::Tab, Modifiers::SHIFT),
        _ => return unknown("csi", b),
    };
    KeyEvent::new(code, modifiers)
}

/// Decode `ESC [ <n> [; <m>] ~` through the fixed editing/function key table.
fn decode_tilde(params: CsiParams) -> KeyEvent {
    let code = match params.first() {
        1 | 7 => KeyCode::Home,
        2 => KeyCode::Insert,
        3 => KeyCode::Delete,
        4 | 8 => KeyCode::End,
        5 => KeyCode::PageUp,
        6 => KeyCode::PageDown,
        11 => KeyCode::F(1),
        12 => KeyCode::F(2),
        13 => KeyCode::F(3),
        14 => KeyCode::F(4),
        15 => KeyCode::F(5),
        17 => KeyCode::F(6),
        18 => KeyCode::F(7),
        19 => KeyCode::F(8),
        20 => KeyCode::F(9),
        21 => KeyCode::F(10),
        23 => KeyCode::F(11),
        24 => KeyCode::F(12),
        n => {
            trace!(target: "termite::input", param = n, "unmapped tilde sequence");
            return KeyEvent::plain(KeyCode::Unknown);
        }
    };
    KeyEvent::new(code, params.modifiers())
}

/// Decode the byte after `ESC O`.
fn decode_ss3(b: u8) -> KeyEvent {
    let code = match b {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'P' => KeyCode::F(1),
        b'Q' => KeyCode::F(2),
        b'R' => KeyCode::F(3),
        b'S' => KeyCode::F(4),
        _ => return unknown("ss3", b),
    };
    KeyEvent::plain(code)
}

/// Decode the xterm modifier parameter (`1 + bitmask`).
///
/// A parameter of 0 or 1 means no modifiers. Only the low bits carry
/// flags, so truncation to u8 is intentional.
#[allow(clippy::cast_possible_truncation)]
const fn decode_modifiers(param: u16) -> Modifiers {
    let val = if param > 0 { param - 1 } else { 0 };
    Modifiers::from_bits_truncate(val as u8)
}

fn unknown(context: &'static str, byte: u8) -> KeyEvent {
    trace!(target: "termite::input", context, byte, "unrecognised input");
    KeyEvent::plain(KeyCode::Unknown)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use pretty_assertions::assert_eq;

    /// Helper: decode every key from a byte string.
    fn decode(data: &[u8]) -> Vec<KeyEvent> {
        KeyDecoder::new(ScriptedSource::from_bytes(data)).collect()
    }

    /// Helper: decode bytes that must produce exactly one key.
    fn decode_one(data: &[u8]) -> KeyEvent {
        let keys = decode(data);
        assert_eq!(keys.len(), 1, "expected 1 key, got {keys:?}");
        keys[0]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    fn key_mod(code: KeyCode, modifiers: Modifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    // ── Plain bytes ─────────────────────────────────────────────────────

    #[test]
    fn ascii_chars() {
        assert_eq!(
            decode(b"ab~"),
            vec![
                key(KeyCode::Char('a')),
                key(KeyCode::Char('b')),
                key(KeyCode::Char('~')),
            ]
        );
    }

    #[test]
    fn ctrl_letters() {
        assert_eq!(decode_one(b"\x11"), KeyEvent::ctrl('q'));
        assert_eq!(decode_one(b"\x06"), KeyEvent::ctrl('f'));
        assert_eq!(decode_one(b"\x0B"), KeyEvent::ctrl('k'));
        assert_eq!(decode_one(b"\x1A"), KeyEvent::ctrl('z'));
        assert_eq!(decode_one(b"\x00"), KeyEvent::ctrl('@'));
    }

    #[test]
    fn enter_from_cr_and_lf() {
        assert_eq!(decode(b"\r\n"), vec![key(KeyCode::Enter), key(KeyCode::Enter)]);
    }

    #[test]
    fn backspace_from_del_and_bs() {
        assert_eq!(
            decode(b"\x7F\x08"),
            vec![key(KeyCode::Backspace), key(KeyCode::Backspace)]
        );
    }

    #[test]
    fn tab() {
        assert_eq!(decode_one(b"\t"), key(KeyCode::Tab));
    }

    #[test]
    fn high_byte_is_unknown() {
        assert_eq!(decode_one(b"\xC3"), key(KeyCode::Unknown));
    }

    #[test]
    fn ctrl_helpers() {
        assert!(KeyEvent::ctrl('s').is_ctrl('s'));
        assert!(!KeyEvent::plain(KeyCode::Char('s')).is_ctrl('s'));
        assert!(key_mod(KeyCode::Left, Modifiers::CTRL | Modifiers::SHIFT).shift());
    }

    // ── Escape ambiguity ────────────────────────────────────────────────

    #[test]
    fn lone_escape_at_end_of_stream() {
        assert_eq!(decode_one(b"\x1b"), key(KeyCode::Escape));
    }

    #[test]
    fn lone_escape_then_timeout() {
        let source = ScriptedSource::new([
            ReadByte::Byte(ESC),
            ReadByte::Timeout,
            ReadByte::Byte(b'x'),
        ]);
        let keys: Vec<_> = KeyDecoder::new(source).collect();
        assert_eq!(keys, vec![key(KeyCode::Escape), key(KeyCode::Char('x'))]);
    }

    #[test]
    fn idle_timeouts_are_retried() {
        let source = ScriptedSource::new([
            ReadByte::Timeout,
            ReadByte::Timeout,
            ReadByte::Byte(b'a'),
        ]);
        let mut decoder = KeyDecoder::new(source);
        assert_eq!(decoder.read_key(), Some(key(KeyCode::Char('a'))));
        assert_eq!(decoder.read_key(), None);
    }

    #[test]
    fn escape_bracket_then_eof_is_escape() {
        assert_eq!(decode_one(b"\x1b["), key(KeyCode::Escape));
        assert_eq!(decode_one(b"\x1bO"), key(KeyCode::Escape));
    }

    #[test]
    fn escape_then_other_byte_is_unknown() {
        assert_eq!(decode_one(b"\x1bx"), key(KeyCode::Unknown));
    }

    // ── CSI letter finals ───────────────────────────────────────────────

    #[test]
    fn arrows() {
        assert_eq!(
            decode(b"\x1b[A\x1b[B\x1b[C\x1b[D"),
            vec![
                key(KeyCode::Up),
                key(KeyCode::Down),
                key(KeyCode::Right),
                key(KeyCode::Left),
            ]
        );
    }

    #[test]
    fn home_end_letters() {
        assert_eq!(decode_one(b"\x1b[H"), key(KeyCode::Home));
        assert_eq!(decode_one(b"\x1b[F"), key(KeyCode::End));
    }

    #[test]
    fn shift_tab() {
        assert_eq!(decode_one(b"\x1b[Z"), key_mod(KeyCode::Tab, Modifiers::SHIFT));
    }

    #[test]
    fn unrecognised_final_is_unknown() {
        assert_eq!(decode_one(b"\x1b[X"), key(KeyCode::Unknown));
    }

    // ── Modifier parameters ─────────────────────────────────────────────

    #[test]
    fn shift_arrows() {
        assert_eq!(decode_one(b"\x1b[1;2D"), key_mod(KeyCode::Left, Modifiers::SHIFT));
        assert_eq!(decode_one(b"\x1b[1;2A"), key_mod(KeyCode::Up, Modifiers::SHIFT));
    }

    #[test]
    fn ctrl_arrows() {
        assert_eq!(decode_one(b"\x1b[1;5C"), key_mod(KeyCode::Right, Modifiers::CTRL));
        assert_eq!(decode_one(b"\x1b[1;5B"), key_mod(KeyCode::Down, Modifiers::CTRL));
    }

    #[test]
    fn ctrl_shift_arrows() {
        assert_eq!(
            decode_one(b"\x1b[1;6D"),
            key_mod(KeyCode::Left, Modifiers::CTRL | Modifiers::SHIFT)
        );
    }

    #[test]
    fn ctrl_home_end() {
        assert_eq!(decode_one(b"\x1b[1;5H"), key_mod(KeyCode::Home, Modifiers::CTRL));
        assert_eq!(decode_one(b"\x1b[1;5F"), key_mod(KeyCode::End, Modifiers::CTRL));
    }

    #[test]
    fn alt_modifier() {
        assert_eq!(decode_one(b"\x1b[1;3A"), key_mod(KeyCode::Up, Modifiers::ALT));
    }

    #[test]
    fn unsupported_modifier_bits_are_dropped() {
        assert_eq!(decode_one(b"\x1b[1;9C"), key(KeyCode::Right));
        assert_eq!(decode_one(b"\x1b[1;13C"), key_mod(KeyCode::Right, Modifiers::CTRL));
    }

    // ── Tilde sequences ─────────────────────────────────────────────────

    #[test]
    fn editing_keys() {
        assert_eq!(
            decode(b"\x1b[1~\x1b[2~\x1b[3~\x1b[4~\x1b[5~\x1b[6~\x1b[7~\x1b[8~"),
            vec![
                key(KeyCode::Home),
                key(KeyCode::Insert),
                key(KeyCode::Delete),
                key(KeyCode::End),
                key(KeyCode::PageUp),
                key(KeyCode::PageDown),
                key(KeyCode::Home),
                key(KeyCode::End),
            ]
        );
    }

    #[test]
    fn function_keys() {
        assert_eq!(decode_one(b"\x1b[12~"), key(KeyCode::F(2)));
        assert_eq!(decode_one(b"\x1b[15~"), key(KeyCode::F(5)));
        assert_eq!(decode_one(b"\x1b[24~"), key(KeyCode::F(12)));
    }

    #[test]
    fn ctrl_delete() {
        assert_eq!(decode_one(b"\x1b[3;5~"), key_mod(KeyCode::Delete, Modifiers::CTRL));
    }

    #[test]
    fn unmapped_tilde_is_unknown() {
        assert_eq!(decode_one(b"\x1b[99~"), key(KeyCode::Unknown));
    }

    #[test]
    fn huge_parameter_saturates() {
        assert_eq!(decode_one(b"\x1b[99999999999~"), key(KeyCode::Unknown));
    }

    // ── SS3 ─────────────────────────────────────────────────────────────

    #[test]
    fn ss3_arrows_and_keys() {
        assert_eq!(
            decode(b"\x1bOA\x1bOD\x1bOH\x1bOQ"),
            vec![
                key(KeyCode::Up),
                key(KeyCode::Left),
                key(KeyCode::Home),
                key(KeyCode::F(2)),
            ]
        );
    }

    #[test]
    fn ss3_unknown_final() {
        assert_eq!(decode_one(b"\x1bOz"), key(KeyCode::Unknown));
    }

    // ── Malformed and truncated sequences ───────────────────────────────

    #[test]
    fn truncated_parameters_are_unknown() {
        assert_eq!(decode_one(b"\x1b[1;5"), key(KeyCode::Unknown));
    }

    #[test]
    fn truncated_by_timeout_then_resumes() {
        let source = ScriptedSource::new([
            ReadByte::Byte(ESC),
            ReadByte::Byte(b'['),
            ReadByte::Byte(b'1'),
            ReadByte::Timeout,
            ReadByte::Byte(b'z'),
        ]);
        let keys: Vec<_> = KeyDecoder::new(source).collect();
        assert_eq!(keys, vec![key(KeyCode::Unknown), key(KeyCode::Char('z'))]);
    }

    #[test]
    fn private_sequence_is_discarded_whole() {
        // `ESC [ < 0 ; 1 ; 2 M` must not leak its tail as typed characters.
        assert_eq!(decode(b"\x1b[<0;1;2Mq"), vec![key(KeyCode::Unknown), key(KeyCode::Char('q'))]);
    }

    #[test]
    fn too_many_parameters_are_discarded() {
        assert_eq!(decode(b"\x1b[1;2;3Ax"), vec![key(KeyCode::Unknown), key(KeyCode::Char('x'))]);
    }

    #[test]
    fn navigation_classification() {
        assert!(KeyCode::PageDown.is_navigation());
        assert!(KeyCode::Home.is_navigation());
        assert!(!KeyCode::Delete.is_navigation());
        assert!(!KeyCode::Unknown.is_navigation());
    }
}
