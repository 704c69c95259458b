//! Frame: what one screen of the editor looks like, minus the bytes.
//!
//! The session computes a [`Frame`] and the renderer paints it. The frame
//! says which text is visible and how each cell is classified; it never
//! contains escape sequences.
//!
//! ```text
//!  row 0            ┌──────── header (name, version, file, perms) ───────┐
//!  rows 1..=N       │ 1   |fn main() {                                    │
//!                   │ 2   |    let x = 1;                                 │
//!                   │     |                     (past end: no number)     │
//!  row N+1          └──────── status ─────────────────────────────────────┘
//! ```
//!
//! The gutter is the line number right-aligned in `number_width` columns,
//! a space and a `|`. Text starts right after it.
//!
//! # Highlight precedence
//!
//! Each visible cell gets one class: selection beats search match, which
//! beats keyword, which beats normal. Byte ranges are mapped to display
//! columns through [`display_column`], so a selected tab covers its whole
//! expansion.

use termite_term::terminal::Size;

use crate::buffer::TextBuffer;
use crate::column::{display_column, expand};
use crate::position::{Position, Range};
use crate::search::Match;
use crate::syntax::{Highlight, Span, highlight_line};

/// Rows above the text area.
pub const HEADER_ROWS: usize = 1;
/// Rows below the text area.
pub const STATUS_ROWS: usize = 1;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Screen geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Terminal width.
    pub cols: usize,
    /// Width of the line-number field, excluding the ` |` separator.
    pub number_width: usize,
    /// Rows available for text, at least 1.
    pub text_rows: usize,
    /// Columns available for text after the gutter.
    pub text_cols: usize,
}

impl Layout {
    #[must_use]
    pub fn new(size: Size, line_count: usize, min_digits: usize) -> Self {
        let cols = usize::from(size.cols);
        let rows = usize::from(size.rows);
        let number_width = digits(line_count).max(min_digits);

        Self {
            cols,
            number_width,
            text_rows: rows.saturating_sub(HEADER_ROWS + STATUS_ROWS).max(1),
            text_cols: cols.saturating_sub(number_width + 2),
        }
    }

    /// Columns taken by the gutter: number, space, `|`.
    #[inline]
    #[must_use]
    pub const fn gutter(&self) -> usize {
        self.number_width + 2
    }

    /// Screen row of the status line.
    #[inline]
    #[must_use]
    pub const fn status_row(&self) -> usize {
        HEADER_ROWS + self.text_rows
    }
}

/// Decimal digits in `n` (1 for 0).
#[must_use]
pub fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// One text row of the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    /// 1-based line number, `None` past the end of the document.
    pub number: Option<usize>,
    /// Visible, tab-expanded bytes after horizontal scrolling.
    pub text: Vec<u8>,
    /// Contiguous spans covering `text` exactly, in order.
    pub spans: Vec<Span>,
}

impl FrameRow {
    /// The bytes of `span`.
    #[must_use]
    pub fn span_text(&self, span: &Span) -> &[u8] {
        &self.text[span.start..span.end]
    }
}

/// Everything the renderer needs to paint one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub layout: Layout,
    pub header: String,
    pub rows: Vec<FrameRow>,
    pub status: String,
    /// Screen cell of the cursor, 0-based (row, col).
    pub cursor: (usize, usize),
}

/// The parts of session state a frame's text area is built from.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub buffer: &'a TextBuffer,
    pub layout: Layout,
    pub tab_width: usize,
    pub cursor: Position,
    /// Active selection, already ordered.
    pub selection: Option<Range>,
    pub matches: &'a [Match],
    pub row_offset: usize,
    pub col_offset: usize,
}

impl View<'_> {
    /// Text rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<FrameRow> {
        (0..self.layout.text_rows)
            .map(|i| {
                let line = self.row_offset + i;
                if line < self.buffer.line_count() {
                    self.text_row(line)
                } else {
                    FrameRow {
                        number: None,
                        text: Vec::new(),
                        spans: Vec::new(),
                    }
                }
            })
            .collect()
    }

    /// Screen cell of the cursor, clamped into the text area.
    #[must_use]
    pub fn cursor_cell(&self) -> (usize, usize) {
        let last_text_row = HEADER_ROWS + self.layout.text_rows - 1;
        let row = (HEADER_ROWS + self.cursor.line.saturating_sub(self.row_offset)).min(last_text_row);

        let line = self.buffer.line(self.cursor.line);
        let disp = display_column(line, self.cursor.col, self.tab_width);
        let col = (self.layout.gutter() + disp.saturating_sub(self.col_offset))
            .min(self.layout.cols.saturating_sub(1));

        (row, col)
    }

    fn text_row(&self, row: usize) -> FrameRow {
        let line = self.buffer.line(row);
        let tw = self.tab_width;
        let expanded = expand(line, tw);
        let vis_start = self.col_offset.min(expanded.len());
        let vis_end = (vis_start + self.layout.text_cols).min(expanded.len());

        let mut cells = vec![Highlight::Normal; vis_end - vis_start];
        let mut paint = |from: usize, to: usize, kind: Highlight| {
            let a = display_column(line, from, tw).max(vis_start);
            let b = display_column(line, to, tw).min(vis_end);
            if a < b {
                cells[a - vis_start..b - vis_start].fill(kind);
            }
        };

        for span in highlight_line(line) {
            paint(span.start, span.end, span.kind);
        }
        for m in self.matches.iter().filter(|m| m.line == row) {
            paint(m.start, m.end, Highlight::Match);
        }
        if let Some((from, to)) = self.selection.and_then(|r| r.cols_on_line(row, line.len())) {
            paint(from, to, Highlight::Selection);
        }

        FrameRow {
            number: Some(row + 1),
            text: expanded[vis_start..vis_end].to_vec(),
            spans: merge_cells(&cells),
        }
    }
}

/// Collapse per-cell classes into maximal runs.
fn merge_cells(cells: &[Highlight]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, &kind) in cells.iter().enumerate() {
        match spans.last_mut() {
            Some(last) if last.kind == kind => last.end = i + 1,
            _ => spans.push(Span {
                kind,
                start: i,
                end: i + 1,
            }),
        }
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
