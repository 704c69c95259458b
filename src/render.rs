// SPDX-License-Identifier: MIT
//
// Frame painting.
//
// A [`Frame`] is turned into one byte buffer of ANSI output and written
// to the terminal in a single `write_all`, so a frame never shows half
// drawn. Every row is cleared and repainted; frames are small enough that
// diffing buys nothing.

use std::io::{self, Write};

use termite_editor::Frame;
use termite_editor::frame::FrameRow;
use termite_editor::syntax::Highlight;
use termite_term::ansi;

// ── Palette (256-colour indices) ─────────────────────────────

const TEXT_FG: u8 = 51;
const KEYWORD_FG: u8 = 213;
const STRING_FG: u8 = 114;
const COMMENT_FG: u8 = 244;
const NUMBER_FG: u8 = 209;
const MATCH_BG: u8 = 11;
const GUTTER_FG: u8 = 57;
const STATUS_FG: u8 = 245;
const HEADER_BG: u8 = 15;
const HEADER_FG: u8 = 18;

const DEFAULT_CAPACITY: usize = 16_384;

/// Accumulates one frame of output.
#[derive(Debug)]
pub struct Renderer {
    buf: Vec<u8>,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Paint `frame` into the internal buffer and write it to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    pub fn paint(&mut self, frame: &Frame, out: &mut impl Write) -> io::Result<()> {
        self.buf.clear();
        paint_frame(&mut self.buf, frame)?;
        out.write_all(&self.buf)?;
        out.flush()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Write the ANSI rendering of `frame` to `w`.
///
/// # Errors
///
/// Returns any I/O error from `w`.
pub fn paint_frame(w: &mut impl Write, frame: &Frame) -> io::Result<()> {
    let layout = frame.layout;
    ansi::cursor_hide(w)?;

    paint_header(w, &frame.header, layout.cols)?;

    for (i, row) in frame.rows.iter().enumerate() {
        ansi::cursor_to(w, 0, cell(1 + i))?;
        ansi::clear_line(w)?;
        paint_row(w, row, layout.number_width)?;
    }

    ansi::cursor_to(w, 0, cell(layout.status_row()))?;
    ansi::clear_line(w)?;
    ansi::fg256(w, STATUS_FG)?;
    w.write_all(truncate(frame.status.as_bytes(), layout.cols))?;
    ansi::reset(w)?;

    let (row, col) = frame.cursor;
    ansi::cursor_to(w, cell(col), cell(row))?;
    ansi::cursor_show(w)
}

fn paint_header(w: &mut impl Write, header: &str, cols: usize) -> io::Result<()> {
    let text = truncate(header.as_bytes(), cols);
    let pad = (cols - text.len()) / 2;

    ansi::cursor_to(w, 0, 0)?;
    ansi::bg256(w, HEADER_BG)?;
    ansi::fg256(w, HEADER_FG)?;
    ansi::bold(w)?;
    write!(w, "{:cols$}", "")?;
    ansi::cursor_to(w, cell(pad), 0)?;
    w.write_all(text)?;
    ansi::reset(w)
}

fn paint_row(w: &mut impl Write, row: &FrameRow, number_width: usize) -> io::Result<()> {
    let Some(number) = row.number else {
        return write!(w, "{:number_width$} |", "");
    };

    ansi::fg256(w, GUTTER_FG)?;
    write!(w, "{number:>number_width$} ")?;
    ansi::reset(w)?;
    w.write_all(b"|")?;

    for span in &row.spans {
        style(w, span.kind)?;
        w.write_all(row.span_text(span))?;
        ansi::reset(w)?;
    }
    Ok(())
}

fn style(w: &mut impl Write, kind: Highlight) -> io::Result<()> {
    match kind {
        Highlight::Normal => ansi::fg256(w, TEXT_FG),
        Highlight::Keyword => {
            ansi::fg256(w, KEYWORD_FG)?;
            ansi::bold(w)
        }
        Highlight::String => ansi::fg256(w, STRING_FG),
        Highlight::Comment => ansi::fg256(w, COMMENT_FG),
        Highlight::Number => ansi::fg256(w, NUMBER_FG),
        Highlight::Match => ansi::bg256(w, MATCH_BG),
        Highlight::Selection => ansi::reverse(w),
    }
}

fn truncate(bytes: &[u8], cols: usize) -> &[u8] {
    &bytes[..bytes.len().min(cols)]
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use termite_editor::{EditorSession, MemoryStorage, NullLog, TextBuffer};
    use termite_term::Size;

    fn frame_for(lines: &[&str], size: Size) -> Frame {
        let mut s = EditorSession::new(MemoryStorage::new(), NullLog)
            .with_buffer(TextBuffer::from_lines(lines));
        s.resize(size);
        s.frame()
    }

    fn render(frame: &Frame) -> String {
        let mut out = Vec::new();
        Renderer::new().paint(frame, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn paints_gutter_and_text() {
        let out = render(&frame_for(&["hello"], Size::new(40, 5)));
        assert!(out.contains("\x1b[38;5;57m   1 \x1b[0m|"));
        assert!(out.contains("\x1b[38;5;51mhello\x1b[0m"));
    }

    #[test]
    fn rows_past_end_have_blank_gutter() {
        let out = render(&frame_for(&["a"], Size::new(40, 5)));
        assert!(out.contains("\x1b[3;1H\x1b[2K     |"));
    }

    #[test]
    fn header_is_centred_and_styled() {
        let frame = frame_for(&["a"], Size::new(60, 5));
        let out = render(&frame);
        let pad = (60 - frame.header.len()) / 2;
        assert!(out.contains("\x1b[48;5;15m\x1b[38;5;18m\x1b[1m"));
        assert!(out.contains(&format!("\x1b[1;{}H{}", pad + 1, frame.header)));
    }

    #[test]
    fn status_and_cursor_last() {
        let frame = frame_for(&["abc"], Size::new(80, 5));
        let out = render(&frame);
        assert!(out.contains(&format!("\x1b[5;1H\x1b[2K\x1b[38;5;245m{}", frame.status)));
        assert!(out.ends_with("\x1b[2;7H\x1b[?25h"));
    }

    #[test]
    fn long_status_is_truncated() {
        let mut frame = frame_for(&["abc"], Size::new(10, 5));
        frame.status = "x".repeat(50);
        let out = render(&frame);
        assert!(out.contains(&format!("\x1b[38;5;245m{}\x1b[0m", "x".repeat(10))));
    }

    #[test]
    fn keyword_style() {
        let out = render(&frame_for(&["return 1"], Size::new(40, 5)));
        assert!(out.contains("\x1b[38;5;213m\x1b[1mreturn\x1b[0m"));
    }
}
