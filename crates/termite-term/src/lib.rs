// SPDX-License-Identifier: MIT
//
// termite-term: terminal plumbing for the termite editor.
//
// Raw mode and the alternate screen (`terminal`), the handful of escape
// sequences the editor paints with (`ansi`), and a byte-at-a-time key
// decoder (`input`) that reads from a timeout-bounded `ByteSource`.
//
// Direct termios and ANSI, no TUI framework.

pub mod ansi;
pub mod input;
pub mod source;
pub mod terminal;

pub use input::{KeyCode, KeyDecoder, KeyEvent, Modifiers};
pub use source::{ByteSource, ReadByte, ScriptedSource, StdinSource};
pub use terminal::{Size, TermError, Terminal};
