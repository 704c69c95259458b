//! Text buffer: the document as an ordered list of lines.
//!
//! Each line is a `Vec<u8>` of single-byte characters with no line-break
//! bytes in it. The buffer always holds at least one line; an empty
//! document is one empty line.
//!
//! # Edit contract
//!
//! Every primitive takes `(row, col)` coordinates, 0-indexed, and is a
//! silent no-op on an invalid row. Columns past the end of a line are
//! clamped where an insertion point makes sense (`insert_char`,
//! `split_line`) and rejected where they don't (`delete_char`). Callers
//! that want a different outcome clamp first.
//!
//! The `modified` flag is raised only by edits that actually change the
//! content, so a no-op never marks the document dirty.

use std::fmt;

use crate::position::{Position, Range};

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// The document being edited.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Vec<u8>>,
    modified: bool,
}

impl TextBuffer {
    // -- Construction -------------------------------------------------------

    /// An empty document: one empty line, unmodified.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            modified: false,
        }
    }

    /// Build a buffer from file content.
    ///
    /// Splits on `\n` and strips one trailing `\r` per line. A final `\n`
    /// terminates the last line rather than starting a new empty one, so
    /// `"a\nb\n"` is two lines. Empty input gives one empty line.
    #[must_use]
    pub fn from_text(text: &[u8]) -> Self {
        let body = text.strip_suffix(b"\n").unwrap_or(text);
        let lines = if text.is_empty() {
            vec![Vec::new()]
        } else {
            body.split(|&b| b == b'\n')
                .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
                .collect()
        };

        Self {
            lines,
            modified: false,
        }
    }

    /// Build a buffer from string lines. Mostly for tests.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut lines: Vec<Vec<u8>> = lines.into_iter().map(|l| l.as_ref().to_vec()).collect();
        if lines.is_empty() {
            lines.push(Vec::new());
        }
        Self {
            lines,
            modified: false,
        }
    }

    /// Serialize for saving: every line followed by `\n`.
    #[must_use]
    pub fn to_text(&self) -> Vec<u8> {
        let size = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = Vec::with_capacity(size);
        for line in &self.lines {
            out.extend_from_slice(line);
            out.push(b'\n');
        }
        out
    }

    // -- Access -------------------------------------------------------------

    /// Number of lines, never zero.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of line `row`, or an empty slice if `row` is out of range.
    #[inline]
    #[must_use]
    pub fn line(&self, row: usize) -> &[u8] {
        self.lines.get(row).map_or(&[], Vec::as_slice)
    }

    /// Length of line `row` in bytes, 0 if out of range.
    #[inline]
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).len()
    }

    /// All lines in order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    /// Index of the last line.
    #[inline]
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    /// Clamp `pos` onto the document: row into `[0, last_row]`, column
    /// into `[0, line_len]`.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_row());
        Position::new(line, pos.col.min(self.line_len(line)))
    }

    // -- Metadata -----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    // -- Primitive edits ----------------------------------------------------

    /// Insert `ch` at `col` of line `row`, clamping `col` to the line end.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: u8) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let col = col.min(line.len());
        line.insert(col, ch);
        self.modified = true;
    }

    /// Remove the byte at `col` of line `row`. No-op at or past the end.
    pub fn delete_char(&mut self, row: usize, col: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        if col < line.len() {
            line.remove(col);
            self.modified = true;
        }
    }

    /// Cut line `row` at `col`: `[0, col)` stays, `[col, end)` becomes a
    /// new line right after it.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };
        let col = col.min(line.len());
        let tail = line.split_off(col);
        self.lines.insert(row + 1, tail);
        self.modified = true;
    }

    /// Append line `row + 1` onto line `row` and remove it. No-op on the
    /// last line.
    pub fn join_with_next(&mut self, row: usize) {
        if row + 1 >= self.lines.len() {
            return;
        }
        let next = self.lines.remove(row + 1);
        self.lines[row].extend_from_slice(&next);
        self.modified = true;
    }

    /// Remove line `row`. The only line is cleared instead of removed.
    pub fn delete_line(&mut self, row: usize) {
        if row >= self.lines.len() {
            return;
        }
        if self.lines.len() == 1 {
            if !self.lines[0].is_empty() {
                self.lines[0].clear();
                self.modified = true;
            }
            return;
        }
        self.lines.remove(row);
        self.modified = true;
    }

    // -- Span edits ---------------------------------------------------------

    /// The bytes `range` covers, with `\n` between spanned lines and none
    /// after the final partial line. Endpoints are clamped first.
    #[must_use]
    pub fn text_in(&self, range: Range) -> Vec<u8> {
        let range = Range::ordered(self.clamp(range.start), self.clamp(range.end));
        let mut out = Vec::new();
        for row in range.start.line..=range.end.line {
            let line = self.line(row);
            if let Some((from, to)) = range.cols_on_line(row, line.len()) {
                out.extend_from_slice(&line[from..to]);
            }
            if row != range.end.line {
                out.push(b'\n');
            }
        }
        out
    }

    /// Delete the bytes `range` covers and return where the cursor lands:
    /// the (clamped) start of the range.
    ///
    /// Multi-line spans drop the covered prefix of the last line and the
    /// covered suffix of the first line, then join the first line with the
    /// next until the span is one line. Lines strictly inside the span
    /// are joined in, not removed.
    pub fn delete_range(&mut self, range: Range) -> Position {
        let start = self.clamp(range.start);
        let end = self.clamp(range.end);
        let Range { start, end } = Range::ordered(start, end);

        if start == end {
            return start;
        }

        if start.line == end.line {
            self.lines[start.line].drain(start.col..end.col);
        } else {
            self.lines[end.line].drain(..end.col);
            self.lines[start.line].truncate(start.col);
            for _ in start.line..end.line {
                self.join_with_next(start.line);
            }
        }

        self.modified = true;
        start
    }

    /// Insert `text` at `pos`, creating a new line at every `\n`, and
    /// return the position right after the inserted text.
    pub fn insert_text(&mut self, pos: Position, text: &[u8]) -> Position {
        let mut at = self.clamp(pos);
        for &b in text {
            if b == b'\n' {
                self.split_line(at.line, at.col);
                at = Position::new(at.line + 1, 0);
            } else {
                self.insert_char(at.line, at.col, b);
                at.col += 1;
            }
        }
        at
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("lines", &self.lines.iter().map(|l| String::from_utf8_lossy(l)).collect::<Vec<_>>())
            .field("modified", &self.modified)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
