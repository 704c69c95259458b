// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Raw byte sources for the key decoder.
//
// The decoder wants one byte at a time with a bounded wait: a lone ESC
// is only distinguishable from the start of an escape sequence by the
// absence of a follow-up byte within a short window. [`ByteSource`]
// captures exactly that contract: every read yields a byte, a timeout,
// or end-of-stream.
//
// `StdinSource` implements it on top of `poll()` so the timeout is a real
// bounded wait on the file descriptor, not a busy loop. `ScriptedSource`
// replays a fixed sequence and backs the decoder's tests.

use std::collections::VecDeque;
use std::time::Duration;

/// Outcome of a single byte read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadByte {
    /// A byte arrived.
    Byte(u8),
    /// No byte arrived within the idle timeout.
    Timeout,
    /// The stream is closed (or the read failed).
    Eof,
}

/// A blocking, timeout-bounded source of input bytes.
pub trait ByteSource {
    /// Wait for the next byte, at most for the source's idle timeout.
    fn read_byte(&mut self) -> ReadByte;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> ReadByte {
        (**self).read_byte()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_byte(&mut self) -> ReadByte {
        (**self).read_byte()
    }
}

// ─── Scripted ───────────────────────────────────────────────────────────────

/// Replays a fixed sequence of reads, then reports end-of-stream forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    reads: VecDeque<ReadByte>,
}

impl ScriptedSource {
    /// Replay the given reads in order.
    #[must_use]
    pub fn new(reads: impl IntoIterator<Item = ReadByte>) -> Self {
        Self {
            reads: reads.into_iter().collect(),
        }
    }

    /// Replay a byte string with no timeouts in between.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(ReadByte::Byte))
    }

    /// Append more reads to the end of the script.
    pub fn push(&mut self, read: ReadByte) {
        self.reads.push_back(read);
    }

    /// Number of reads not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.reads.len()
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> ReadByte {
        self.reads.pop_front().unwrap_or(ReadByte::Eof)
    }
}

// ─── Stdin ──────────────────────────────────────────────────────────────────

/// Default wait before a pending ESC is taken as a lone Escape press.
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(100);

/// Reads stdin one byte at a time with a `poll()`-bounded wait.
///
/// Expects the terminal to be in raw mode (see
/// [`Terminal::enter`](crate::terminal::Terminal::enter)); otherwise the
/// kernel's line discipline delivers nothing until Enter.
#[derive(Debug, Clone)]
pub struct StdinSource {
    timeout_ms: i32,
}

impl StdinSource {
    /// A stdin source with the given idle timeout.
    ///
    /// Timeouts beyond `i32::MAX` milliseconds saturate.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let timeout_ms = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
        Self { timeout_ms }
    }

    /// The idle timeout in milliseconds.
    #[inline]
    #[must_use]
    pub const fn timeout_ms(&self) -> i32 {
        self.timeout_ms
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new(DEFAULT_ESCAPE_TIMEOUT)
    }
}

impl ByteSource for StdinSource {
    #[cfg(unix)]
    fn read_byte(&mut self) -> ReadByte {
        use std::io;

        let fd = libc::STDIN_FILENO;

        let ready = unsafe {
            let mut pfd = libc::pollfd {
                fd,
                events: libc::POLLIN,
                revents: 0,
            };
            libc::poll(&raw mut pfd, 1, self.timeout_ms)
        };

        if ready == 0 {
            return ReadByte::Timeout;
        }
        if ready < 0 {
            // A signal (e.g. SIGWINCH) interrupting the wait is not an error.
            return if io::Error::last_os_error().kind() == io::ErrorKind::Interrupted {
                ReadByte::Timeout
            } else {
                ReadByte::Eof
            };
        }

        let mut byte = 0u8;
        let n = unsafe { libc::read(fd, (&raw mut byte).cast(), 1) };

        match n {
            1 => ReadByte::Byte(byte),
            n if n < 0 && io::Error::last_os_error().kind() == io::ErrorKind::Interrupted => {
                ReadByte::Timeout
            }
            _ => ReadByte::Eof,
        }
    }

    /// Non-unix fallback: a plain blocking read, so no lone-ESC timeout.
    #[cfg(not(unix))]
    fn read_byte(&mut self) -> ReadByte {
        use std::io::Read;

        let mut byte = [0u8; 1];
        match std::io::stdin().lock().read(&mut byte) {
            Ok(1) => ReadByte::Byte(byte[0]),
            _ => ReadByte::Eof,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_replays_then_eof() {
        let mut src = ScriptedSource::new([ReadByte::Byte(b'a'), ReadByte::Timeout]);
        assert_eq!(src.read_byte(), ReadByte::Byte(b'a'));
        assert_eq!(src.read_byte(), ReadByte::Timeout);
        assert_eq!(src.read_byte(), ReadByte::Eof);
        assert_eq!(src.read_byte(), ReadByte::Eof);
    }

    #[test]
    fn scripted_from_bytes() {
        let mut src = ScriptedSource::from_bytes(b"hi");
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.read_byte(), ReadByte::Byte(b'h'));
        assert_eq!(src.read_byte(), ReadByte::Byte(b'i'));
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn scripted_push_appends() {
        let mut src = ScriptedSource::default();
        src.push(ReadByte::Byte(b'x'));
        assert_eq!(src.read_byte(), ReadByte::Byte(b'x'));
    }

    #[test]
    fn mut_ref_is_a_source() {
        fn first<S: ByteSource>(mut source: S) -> ReadByte {
            source.read_byte()
        }

        let mut src = ScriptedSource::from_bytes(b"zy");
        assert_eq!(first(&mut src), ReadByte::Byte(b'z'));
        assert_eq!(src.remaining(), 1);
    }

    #[test]
    fn stdin_timeout_conversion() {
        assert_eq!(StdinSource::default().timeout_ms(), 100);
        assert_eq!(StdinSource::new(Duration::from_millis(25)).timeout_ms(), 25);
        assert_eq!(StdinSource::new(Duration::MAX).timeout_ms(), i32::MAX);
    }
}
