//! Character index ↔ display column mapping under tab expansion.
//!
//! A tab advances to the next multiple of the tab width; every other byte
//! takes one cell. [`display_column`] measures a prefix, [`expand`]
//! materializes the whole line, and the two always agree:
//! `display_column(line, n, w) == expand(&line[..n], w).len()`.
//!
//! [`clamp_offset`] is the viewport scroll rule, shared by the vertical
//! axis (lines) and the horizontal axis (display columns).

/// Display column of byte index `index` in `line`.
///
/// `index` is clamped to the line length, so passing the length (or
/// more) measures the whole line.
#[must_use]
pub fn display_column(line: &[u8], index: usize, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    line[..index.min(line.len())]
        .iter()
        .fold(0, |col, &b| advance(col, b, tab_width))
}

/// Display width of the whole line.
#[inline]
#[must_use]
pub fn display_len(line: &[u8], tab_width: usize) -> usize {
    display_column(line, line.len(), tab_width)
}

/// The line with every tab replaced by spaces up to its tab stop.
#[must_use]
pub fn expand(line: &[u8], tab_width: usize) -> Vec<u8> {
    let tab_width = tab_width.max(1);
    let mut out = Vec::with_capacity(line.len());
    for &b in line {
        if b == b'\t' {
            let spaces = tab_width - out.len() % tab_width;
            out.resize(out.len() + spaces, b' ');
        } else {
            out.push(b);
        }
    }
    out
}

#[inline]
const fn advance(col: usize, b: u8, tab_width: usize) -> usize {
    if b == b'\t' { col + tab_width - col % tab_width } else { col + 1 }
}

/// Scroll `offset` by the least amount that puts `cursor` inside
/// `[offset, offset + visible)`, then cap it at `extent - visible` so the
/// view never scrolls past the end of the content.
///
/// `extent` is the size of the scrollable axis: the line count
/// vertically, the line's display length + 1 horizontally (the cell
/// after the last character must stay reachable). A zero-sized viewport
/// leaves the offset alone.
#[must_use]
pub const fn clamp_offset(offset: usize, cursor: usize, visible: usize, extent: usize) -> usize {
    if visible == 0 {
        return offset;
    }

    let mut offset = offset;
    if cursor < offset {
        offset = cursor;
    } else if cursor >= offset + visible {
        offset = cursor + 1 - visible;
    }

    let max = extent.saturating_sub(visible);
    if offset > max { max } else { offset }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
