//! Editor options.
//!
//! | Option          | Default | Minimum | Effect                                  |
//! |-----------------|---------|---------|-----------------------------------------|
//! | `tab_width`     | 4       | 1       | Columns between tab stops               |
//! | `jump_lines`    | 6       | 1       | Lines moved by Ctrl+Up / Ctrl+Down      |
//! | `gutter_digits` | 4       | 1       | Minimum width of the line-number gutter |
//!
//! Setters clamp to the minimum instead of rejecting, so a config file
//! with `tab_width = 0` still produces a usable editor.

/// Default columns between tab stops.
pub const DEFAULT_TAB_WIDTH: usize = 4;
/// Default vertical jump for Ctrl+Up / Ctrl+Down.
pub const DEFAULT_JUMP_LINES: usize = 6;
/// Default minimum line-number width.
pub const DEFAULT_GUTTER_DIGITS: usize = 4;

/// Tunables for an [`EditorSession`](crate::session::EditorSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    tab_width: usize,
    jump_lines: usize,
    gutter_digits: usize,
}

impl EditorOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            jump_lines: DEFAULT_JUMP_LINES,
            gutter_digits: DEFAULT_GUTTER_DIGITS,
        }
    }

    #[inline]
    #[must_use]
    pub const fn tab_width(&self) -> usize {
        self.tab_width
    }

    #[inline]
    #[must_use]
    pub const fn jump_lines(&self) -> usize {
        self.jump_lines
    }

    #[inline]
    #[must_use]
    pub const fn gutter_digits(&self) -> usize {
        self.gutter_digits
    }

    #[must_use]
    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = width.max(1);
        self
    }

    #[must_use]
    pub fn with_jump_lines(mut self, lines: usize) -> Self {
        self.jump_lines = lines.max(1);
        self
    }

    #[must_use]
    pub fn with_gutter_digits(mut self, digits: usize) -> Self {
        self.gutter_digits = digits.max(1);
        self
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
