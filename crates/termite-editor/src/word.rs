//! Word-boundary motions for Ctrl+Left / Ctrl+Right.
//!
//! A line splits into runs of three classes: **word** bytes (ASCII
//! letters, digits, underscore), **punctuation** (any other non-blank
//! byte) and **blanks**. `foo.bar(x)` is five runs: `foo`, `.`, `bar`,
//! `(`, `x`, `)`.
//!
//! Both motions stop at run starts and skip blanks, and both cross a line
//! boundary when already at the edge of the line. The same policy serves
//! plain and Shift-extended (selecting) motions.

use crate::buffer::TextBuffer;
use crate::position::Position;

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// Character class for word boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters, digits, underscore.
    Word,
    /// Non-blank, non-word bytes (operators, brackets, etc.).
    Punctuation,
    /// Space, tab and other ASCII whitespace.
    Blank,
}

impl CharClass {
    #[must_use]
    pub const fn of(b: u8) -> Self {
        if b.is_ascii_alphanumeric() || b == b'_' {
            Self::Word
        } else if b.is_ascii_whitespace() {
            Self::Blank
        } else {
            Self::Punctuation
        }
    }
}

// ---------------------------------------------------------------------------
// Motions
// ---------------------------------------------------------------------------

/// Start of the run before `pos`, skipping blanks.
///
/// At column 0 moves to the end of the previous line.
#[must_use]
pub fn word_left(buf: &TextBuffer, pos: Position) -> Position {
    let pos = buf.clamp(pos);
    if pos.col == 0 {
        return if pos.line > 0 {
            Position::new(pos.line - 1, buf.line_len(pos.line - 1))
        } else {
            pos
        };
    }

    let s = buf.line(pos.line);
    let mut c = pos.col - 1;

    while c > 0 && CharClass::of(s[c]) == CharClass::Blank {
        c -= 1;
    }

    // A blank left at column 0 is a run of its own; stop there.
    let class = CharClass::of(s[c]);
    if class != CharClass::Blank {
        while c > 0 && CharClass::of(s[c - 1]) == class {
            c -= 1;
        }
    }

    Position::new(pos.line, c)
}

/// Start of the next run after the one under `pos`, skipping blanks.
///
/// At the end of a line moves to the start of the next one.
#[must_use]
pub fn word_right(buf: &TextBuffer, pos: Position) -> Position {
    let pos = buf.clamp(pos);
    let s = buf.line(pos.line);
    let n = s.len();

    if pos.col >= n {
        return if pos.line < buf.last_row() {
            Position::new(pos.line + 1, 0)
        } else {
            pos
        };
    }

    let mut c = pos.col;
    let class = CharClass::of(s[c]);
    if class != CharClass::Blank {
        while c < n && CharClass::of(s[c]) == class {
            c += 1;
        }
    }
    while c < n && CharClass::of(s[c]) == CharClass::Blank {
        c += 1;
    }

    Position::new(pos.line, c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(lines)
    }

    const fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    // -- classify -----------------------------------------------------------

    #[test]
    fn classify_bytes() {
        assert_eq!(CharClass::of(b'a'), CharClass::Word);
        assert_eq!(CharClass::of(b'Z'), CharClass::Word);
        assert_eq!(CharClass::of(b'7'), CharClass::Word);
        assert_eq!(CharClass::of(b'_'), CharClass::Word);
        assert_eq!(CharClass::of(b'.'), CharClass::Punctuation);
        assert_eq!(CharClass::of(b'('), CharClass::Punctuation);
        assert_eq!(CharClass::of(b' '), CharClass::Blank);
        assert_eq!(CharClass::of(b'\t'), CharClass::Blank);
    }

    // -- word_left ----------------------------------------------------------

    #[test]
    fn left_from_end_to_word_start() {
        let b = buf(&["foo bar"]);
        assert_eq!(word_left(&b, p(0, 7)), p(0, 4));
        assert_eq!(word_left(&b, p(0, 4)), p(0, 0));
    }

    #[test]
    fn left_from_middle_of_word() {
        let b = buf(&["hello"]);
        assert_eq!(word_left(&b, p(0, 3)), p(0, 0));
    }

    #[test]
    fn left_stops_at_punctuation_runs() {
        let b = buf(&["foo.bar"]);
        assert_eq!(word_left(&b, p(0, 7)), p(0, 4));
        assert_eq!(word_left(&b, p(0, 4)), p(0, 3));
        assert_eq!(word_left(&b, p(0, 3)), p(0, 0));
    }

    #[test]
    fn left_skips_multiple_blanks() {
        let b = buf(&["a   =>   b"]);
        assert_eq!(word_left(&b, p(0, 9)), p(0, 4));
    }

    #[test]
    fn left_over_leading_blanks_stops_at_column_zero() {
        let b = buf(&["    x"]);
        assert_eq!(word_left(&b, p(0, 4)), p(0, 0));
    }

    #[test]
    fn left_at_column_zero_crosses_to_previous_line_end() {
        let b = buf(&["first", "second"]);
        assert_eq!(word_left(&b, p(1, 0)), p(0, 5));
    }

    #[test]
    fn left_at_document_start_stays() {
        let b = buf(&["abc"]);
        assert_eq!(word_left(&b, p(0, 0)), p(0, 0));
    }

    #[test]
    fn left_past_line_end_is_clamped() {
        let b = buf(&["ab cd"]);
        assert_eq!(word_left(&b, p(0, 40)), p(0, 3));
    }

    // -- word_right ---------------------------------------------------------

    #[test]
    fn right_to_next_word_start() {
        let b = buf(&["foo bar baz"]);
        assert_eq!(word_right(&b, p(0, 0)), p(0, 4));
        assert_eq!(word_right(&b, p(0, 5)), p(0, 8));
    }

    #[test]
    fn right_stops_at_punctuation_runs() {
        let b = buf(&["foo.bar()"]);
        assert_eq!(word_right(&b, p(0, 0)), p(0, 3));
        assert_eq!(word_right(&b, p(0, 3)), p(0, 4));
        assert_eq!(word_right(&b, p(0, 4)), p(0, 7));
        assert_eq!(word_right(&b, p(0, 7)), p(0, 9));
    }

    #[test]
    fn right_from_blank_skips_to_next_run() {
        let b = buf(&["a    b"]);
        assert_eq!(word_right(&b, p(0, 1)), p(0, 5));
    }

    #[test]
    fn right_last_word_lands_on_line_end() {
        let b = buf(&["foo bar", "next"]);
        assert_eq!(word_right(&b, p(0, 4)), p(0, 7));
    }

    #[test]
    fn right_at_line_end_crosses_to_next_line() {
        let b = buf(&["foo", "bar"]);
        assert_eq!(word_right(&b, p(0, 3)), p(1, 0));
    }

    #[test]
    fn right_at_document_end_stays() {
        let b = buf(&["foo"]);
        assert_eq!(word_right(&b, p(0, 3)), p(0, 3));
    }

    #[test]
    fn empty_lines_cross_both_ways() {
        let b = buf(&["a", "", "b"]);
        assert_eq!(word_right(&b, p(1, 0)), p(2, 0));
        assert_eq!(word_left(&b, p(1, 0)), p(0, 1));
    }
}
