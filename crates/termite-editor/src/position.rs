//! Cursor positions and ranges in a [`TextBuffer`](crate::buffer::TextBuffer).
//!
//! Coordinates are **0-indexed** byte offsets: line 0 is the first line and
//! column 0 is the first byte of it. A column equal to the line length is
//! the "after last character" cell where typing appends. Lines hold
//! single-byte characters only, so byte and character offsets coincide.
//!
//! The status line shows positions 1-indexed; that conversion happens in
//! [`Display`](fmt::Display) and nowhere else.

use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A (line, column) pair, both 0-indexed.
///
/// Ordered lexicographically: line first, then column.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Start of the document.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.line.cmp(&other.line).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open span `[start, end)` with `start <= end`.
///
/// Selections are stored as anchor + cursor, either of which may come
/// first in the text; [`Range::ordered`] turns that pair into a range.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Build a range from two positions in any order.
    #[inline]
    #[must_use]
    pub fn ordered(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    #[must_use]
    pub const fn is_single_line(self) -> bool {
        self.start.line == self.end.line
    }

    /// Byte span `[from, to)` this range covers on `line`, for a line of
    /// `len` bytes. `None` when the line lies outside the range.
    ///
    /// Interior lines are covered entirely; the first and last lines are
    /// cut at the range's columns, each clamped to `len`.
    #[must_use]
    pub fn cols_on_line(self, line: usize, len: usize) -> Option<(usize, usize)> {
        if line < self.start.line || line > self.end.line {
            return None;
        }
        let from = if line == self.start.line { self.start.col.min(len) } else { 0 };
        let to = if line == self.end.line { self.end.col.min(len) } else { len };
        Some((from, to.max(from)))
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
