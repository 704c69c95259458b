//! Search: case-sensitive literal matching over the whole buffer.
//!
//! [`find_matches`] scans every line. After a hit the scan resumes one
//! byte past the match start, so overlapping occurrences are all found:
//! `"aa"` occurs twice in `"aaa"`.
//!
//! [`SearchState`] holds the query, its matches and the current match
//! index. Matches are recomputed whenever the query changes and are NOT
//! updated by edits, so a match may point past the end of a line that
//! has since shrunk. Consumers clamp before using one.

use crate::buffer::TextBuffer;
use crate::position::Position;

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// One occurrence of the query: bytes `[start, end)` of `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Match {
    /// Where the cursor goes when jumping here, clamped onto `buf`.
    #[must_use]
    pub fn target(self, buf: &TextBuffer) -> Position {
        buf.clamp(Position::new(self.line, self.start))
    }
}

/// Every occurrence of `query` in `buf`, in document order.
///
/// An empty query matches nothing.
#[must_use]
pub fn find_matches(buf: &TextBuffer, query: &[u8]) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (line, text) in buf.lines().iter().enumerate() {
        let mut from = 0;
        while let Some(start) = find_from(text, query, from) {
            out.push(Match {
                line,
                start,
                end: start + query.len(),
            });
            from = start + 1;
        }
    }
    out
}

fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// The query and its matches, kept across search sessions so Ctrl+F
/// resumes with the previous query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: Vec<u8>,
    matches: Vec<Match>,
    current: Option<usize>,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn query(&self) -> &[u8] {
        &self.query
    }

    #[inline]
    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Index of the match the cursor was last moved to.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    // -- Query editing ------------------------------------------------------

    /// Append a byte to the query and recompute. Returns the first match.
    pub fn push(&mut self, buf: &TextBuffer, b: u8) -> Option<Match> {
        self.query.push(b);
        self.recompute(buf)
    }

    /// Drop the last query byte and recompute. Returns the first match.
    pub fn pop(&mut self, buf: &TextBuffer) -> Option<Match> {
        self.query.pop();
        self.recompute(buf)
    }

    /// Rescan `buf` for the current query and select the first match.
    pub fn recompute(&mut self, buf: &TextBuffer) -> Option<Match> {
        self.matches = find_matches(buf, &self.query);
        self.current = if self.matches.is_empty() { None } else { Some(0) };
        self.matches.first().copied()
    }

    /// Drop the matches (and their highlighting) but keep the query.
    pub fn clear_matches(&mut self) {
        self.matches.clear();
        self.current = None;
    }

    // -- Cycling ------------------------------------------------------------

    /// Move to the next match, wrapping past the last one.
    pub fn cycle_next(&mut self) -> Option<Match> {
        self.step(|i, n| (i + 1) % n)
    }

    /// Move to the previous match, wrapping before the first one.
    pub fn cycle_prev(&mut self) -> Option<Match> {
        self.step(|i, n| (i + n - 1) % n)
    }

    fn step(&mut self, f: impl FnOnce(usize, usize) -> usize) -> Option<Match> {
        let n = self.matches.len();
        if n == 0 {
            return None;
        }
        let i = f(self.current.unwrap_or(0).min(n - 1), n);
        self.current = Some(i);
        Some(self.matches[i])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
