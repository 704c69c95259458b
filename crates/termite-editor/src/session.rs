//! Editor session: the state machine between keys and frames.
//!
//! An [`EditorSession`] owns the buffer, cursor, selection, scroll
//! offsets, search state and clipboard. The caller's loop is:
//!
//! ```text
//! loop {
//!     renderer.paint(&session.frame());
//!     let key = decoder.read_key()?;
//!     if session.handle(key) == Action::Quit { break; }
//! }
//! ```
//!
//! # Selection
//!
//! Shift + any navigation key starts a selection at the current cursor
//! (the anchor) if none is active, then moves. Navigation keys, with or
//! without Shift, keep the selection, and so does [`KeyCode::Unknown`]
//! (often the tail of a sequence a terminal split across reads). Any
//! other key clears it. The selection is *active* only while the cursor
//! is away from the anchor.
//!
//! # Invariants after every key
//!
//! - `cursor.line < line_count` and `cursor.col <= line_len(cursor.line)`
//! - the cursor cell is inside the viewport (see [`clamp_offset`])
//!
//! # Key map (Edit mode)
//!
//! | Key                   | Effect                                      |
//! |-----------------------|---------------------------------------------|
//! | arrows, Home/End, PgUp/PgDn | move                                  |
//! | Ctrl+Left/Right       | word motion                                 |
//! | Ctrl+Up/Down          | jump by `jump_lines`                        |
//! | Ctrl+Home/End         | document start / end                        |
//! | Shift+(any of above)  | extend selection                            |
//! | Ctrl+F                | search                                      |
//! | Ctrl+C / X / V        | copy / cut / paste                          |
//! | Ctrl+K                | kill line                                   |
//! | Ctrl+S                | save (prompts for a name if untitled)       |
//! | Ctrl+G                | jump to the `)` closing the next `(`        |
//! | Ctrl+Q                | quit                                        |
//! | Escape                | drop selection and search highlights        |

use std::path::{Path, PathBuf};

use termite_term::input::{KeyCode, KeyEvent};
use termite_term::terminal::Size;
use tracing::{debug, info, warn};

use crate::buffer::TextBuffer;
use crate::clipboard::Clipboard;
use crate::column::{clamp_offset, display_column, display_len};
use crate::frame::{Frame, Layout, View};
use crate::log::DebugLog;
use crate::mode::{Action, Mode};
use crate::options::EditorOptions;
use crate::persist::Persistence;
use crate::position::{Position, Range};
use crate::search::{Match, SearchState};
use crate::word::{word_left, word_right};

/// Status shown before anything else has happened.
pub const WELCOME: &str = "Press Ctrl-Q to quit";

/// Name shown for a session with no file.
pub const UNTITLED: &str = "(untitled)";

// ---------------------------------------------------------------------------
// EditorSession
// ---------------------------------------------------------------------------

/// One editing session over one document.
pub struct EditorSession<P, L> {
    buffer: TextBuffer,
    cursor: Position,
    anchor: Position,
    selecting: bool,

    row_offset: usize,
    col_offset: usize,
    size: Size,

    mode: Mode,
    search: SearchState,
    /// Status to restore when a search is cancelled.
    saved_status: String,
    /// Text typed into the Save As prompt.
    prompt: String,

    clipboard: Clipboard,
    status: String,
    last_note: String,

    filename: Option<PathBuf>,
    file_info: String,

    options: EditorOptions,
    storage: P,
    log: L,
}

impl<P: Persistence, L: DebugLog> EditorSession<P, L> {
    /// A session on an empty, untitled document.
    pub fn new(storage: P, log: L) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Position::ZERO,
            anchor: Position::ZERO,
            selecting: false,
            row_offset: 0,
            col_offset: 0,
            size: Size::FALLBACK,
            mode: Mode::Edit,
            search: SearchState::new(),
            saved_status: String::new(),
            prompt: String::new(),
            clipboard: Clipboard::new(),
            status: WELCOME.to_owned(),
            last_note: String::new(),
            filename: None,
            file_info: String::new(),
            options: EditorOptions::default(),
            storage,
            log,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the document without touching storage.
    #[must_use]
    pub fn with_buffer(mut self, buffer: TextBuffer) -> Self {
        self.buffer = buffer;
        self.cursor = Position::ZERO;
        self.selecting = false;
        self
    }

    // -- Accessors ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[inline]
    #[must_use]
    pub fn last_note(&self) -> &str {
        &self.last_note
    }

    #[inline]
    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    #[inline]
    #[must_use]
    pub const fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    #[inline]
    #[must_use]
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn offsets(&self) -> (usize, usize) {
        (self.row_offset, self.col_offset)
    }

    #[inline]
    #[must_use]
    pub const fn storage(&self) -> &P {
        &self.storage
    }

    #[inline]
    #[must_use]
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// The active selection, ordered, or `None` if nothing is selected.
    #[must_use]
    pub fn selection(&self) -> Option<Range> {
        self.selection_active()
            .then(|| Range::ordered(self.anchor, self.cursor))
    }

    fn selection_active(&self) -> bool {
        self.selecting && self.anchor != self.cursor
    }

    fn layout(&self) -> Layout {
        Layout::new(self.size, self.buffer.line_count(), self.options.gutter_digits())
    }

    // -- Session boundaries -------------------------------------------------

    /// Load `path` into the session.
    ///
    /// On failure the document is left as it was and the path is kept as
    /// the save target, so a new file can be created by saving.
    pub fn open(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        match self.storage.load(&path) {
            Ok(bytes) => {
                self.buffer = TextBuffer::from_text(&bytes);
                self.cursor = Position::ZERO;
                self.selecting = false;
                self.row_offset = 0;
                self.col_offset = 0;
                self.search.clear_matches();
                self.status = format!("Opened: {}", path.display());
                info!(target: "termite::session", path = %path.display(), lines = self.buffer.line_count(), "opened");
            }
            Err(err) => {
                self.status = format!("Failed to open: {}", path.display());
                warn!(target: "termite::session", error = %err, "open failed");
            }
        }
        self.file_info = self.storage.describe(&path);
        self.filename = Some(path);
    }

    /// Record a new terminal size and re-clamp scrolling.
    pub fn resize(&mut self, size: Size) {
        debug!(target: "termite::session", cols = size.cols, rows = size.rows, "resize");
        self.size = size;
        self.scroll();
    }

    // -- Key dispatch -------------------------------------------------------

    /// Apply one key.
    pub fn handle(&mut self, key: KeyEvent) -> Action {
        let action = match self.mode {
            Mode::Edit => self.handle_edit(key),
            Mode::Search => {
                self.handle_search(key);
                Action::Continue
            }
            Mode::Prompt => {
                self.handle_prompt(key);
                Action::Continue
            }
        };

        self.clamp_cursor();
        self.scroll();
        action
    }

    fn handle_edit(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.control();
        let shift = key.shift();

        match key.code {
            KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
                'q' => {
                    info!(target: "termite::session", "quit");
                    return Action::Quit;
                }
                'f' => self.start_search(),
                'c' => self.copy(),
                'x' => self.cut(),
                'v' => self.paste(),
                's' => self.save(),
                'k' => self.kill_line(),
                'g' => self.jump_to_closing_paren(),
                _ => {}
            },
            KeyCode::Char(ch) => {
                if let Ok(b) = u8::try_from(ch) {
                    self.insert_byte(b);
                }
            }
            KeyCode::Tab => self.insert_byte(b'\t'),
            KeyCode::Enter => self.enter(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Escape => {
                self.selecting = false;
                self.search.clear_matches();
            }
            code if code.is_navigation() => {
                if shift && !self.selecting {
                    self.selecting = true;
                    self.anchor = self.cursor;
                }
                self.navigate(code, ctrl);
            }
            _ => {}
        }

        if !(key.code.is_navigation() || key.code == KeyCode::Unknown) {
            self.selecting = false;
        }
        Action::Continue
    }

    // -- Navigation ---------------------------------------------------------

    fn navigate(&mut self, code: KeyCode, ctrl: bool) {
        let last = self.buffer.last_row();
        let Position { line, col } = self.cursor;
        let len = self.buffer.line_len(line);
        let page = self.layout().text_rows;
        let jump = self.options.jump_lines();

        self.cursor = match (code, ctrl) {
            (KeyCode::Left, true) => word_left(&self.buffer, self.cursor),
            (KeyCode::Right, true) => word_right(&self.buffer, self.cursor),
            (KeyCode::Up, true) => Position::new(line.saturating_sub(jump), col),
            (KeyCode::Down, true) => Position::new((line + jump).min(last), col),
            (KeyCode::Home, true) => Position::ZERO,
            (KeyCode::End, true) => Position::new(last, self.buffer.line_len(last)),

            (KeyCode::Up, false) => Position::new(line.saturating_sub(1), col),
            (KeyCode::Down, false) => Position::new((line + 1).min(last), col),
            (KeyCode::Left, false) if col > 0 => Position::new(line, col - 1),
            (KeyCode::Left, false) if line > 0 => {
                Position::new(line - 1, self.buffer.line_len(line - 1))
            }
            (KeyCode::Right, false) if col < len => Position::new(line, col + 1),
            (KeyCode::Right, false) if line < last => Position::new(line + 1, 0),
            (KeyCode::Home, false) => Position::new(line, 0),
            (KeyCode::End, false) => Position::new(line, len),

            (KeyCode::PageUp, _) => Position::new(line.saturating_sub(page), col),
            (KeyCode::PageDown, _) => Position::new((line + page).min(last), col),
            _ => self.cursor,
        };
    }

    // -- Editing ------------------------------------------------------------

    fn insert_byte(&mut self, b: u8) {
        if self.selection_active() {
            self.delete_selection();
        }
        self.buffer.insert_char(self.cursor.line, self.cursor.col, b);
        self.cursor.col += 1;
    }

    fn enter(&mut self) {
        self.buffer.split_line(self.cursor.line, self.cursor.col);
        self.cursor = Position::new(self.cursor.line + 1, 0);
    }

    fn backspace(&mut self) {
        if self.selection_active() {
            self.delete_selection();
            return;
        }

        let Position { line, col } = self.cursor;
        if col > 0 {
            self.buffer.delete_char(line, col - 1);
            self.cursor.col -= 1;
        } else if line > 0 {
            let prev_len = self.buffer.line_len(line - 1);
            self.buffer.join_with_next(line - 1);
            self.cursor = Position::new(line - 1, prev_len);
        }
    }

    fn delete(&mut self) {
        if self.selection_active() {
            self.delete_selection();
            return;
        }

        let Position { line, col } = self.cursor;
        if col < self.buffer.line_len(line) {
            self.buffer.delete_char(line, col);
        } else {
            self.buffer.join_with_next(line);
        }
    }

    fn delete_selection(&mut self) {
        if let Some(range) = self.selection() {
            self.cursor = self.buffer.delete_range(range);
        }
        self.selecting = false;
    }

    fn kill_line(&mut self) {
        self.buffer.delete_line(self.cursor.line);
        self.clamp_cursor();
    }

    // -- Clipboard ----------------------------------------------------------

    fn copy(&mut self) {
        if let Some(range) = self.selection() {
            self.clipboard.set(self.buffer.text_in(range));
            self.status = "Copied".to_owned();
        }
        self.selecting = false;
    }

    fn cut(&mut self) {
        if let Some(range) = self.selection() {
            self.clipboard.set(self.buffer.text_in(range));
            self.delete_selection();
            self.status = "Cut".to_owned();
        }
        self.selecting = false;
    }

    fn paste(&mut self) {
        if self.clipboard.is_empty() {
            self.status = "Clipboard empty".to_owned();
            return;
        }
        if self.selection_active() {
            self.delete_selection();
        }
        let text = self.clipboard.content().to_vec();
        self.cursor = self.buffer.insert_text(self.cursor, &text);
    }

    // -- Ctrl+G -------------------------------------------------------------

    /// Move to the first `)` on the current line that follows a `(` at or
    /// after the cursor.
    fn jump_to_closing_paren(&mut self) {
        self.note("Ctrl-G");

        let line = self.buffer.line(self.cursor.line);
        let mut opened = false;
        let target = line
            .iter()
            .enumerate()
            .skip(self.cursor.col)
            .find(|&(_, &b)| {
                opened |= b == b'(';
                b == b')' && opened
            })
            .map(|(i, _)| i);

        if let Some(col) = target {
            self.cursor.col = col;
        }
    }

    fn note(&mut self, note: &str) {
        self.log.note(note);
        note.clone_into(&mut self.last_note);
    }

    // -- Search mode --------------------------------------------------------

    fn start_search(&mut self) {
        self.saved_status = std::mem::take(&mut self.status);
        self.search.recompute(&self.buffer);
        self.mode = Mode::Search;
        debug!(target: "termite::session", mode = self.mode.name(), "mode change");
    }

    fn handle_search(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.mode = Mode::Edit;
                debug!(
                    target: "termite::session",
                    query = %String::from_utf8_lossy(self.search.query()),
                    matches = self.search.matches().len(),
                    "search committed"
                );
            }
            KeyCode::Escape => {
                self.mode = Mode::Edit;
                self.status = std::mem::take(&mut self.saved_status);
            }
            KeyCode::Up => {
                let m = self.search.cycle_prev();
                self.jump_to(m);
            }
            KeyCode::Down => {
                let m = self.search.cycle_next();
                self.jump_to(m);
            }
            KeyCode::Backspace => {
                let m = self.search.pop(&self.buffer);
                self.jump_to(m);
            }
            KeyCode::Char(ch) if !key.control() => {
                if let Ok(b) = u8::try_from(ch) {
                    let m = self.search.push(&self.buffer, b);
                    self.jump_to(m);
                }
            }
            _ => {}
        }
    }

    fn jump_to(&mut self, m: Option<Match>) {
        if let Some(m) = m {
            self.cursor = m.target(&self.buffer);
        }
    }

    // -- Save / prompt mode -------------------------------------------------

    fn save(&mut self) {
        match self.filename.clone() {
            Some(path) => self.save_to(path),
            None => {
                self.prompt.clear();
                self.mode = Mode::Prompt;
            }
        }
    }

    fn handle_prompt(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.mode = Mode::Edit;
                let input = std::mem::take(&mut self.prompt);
                if input.is_empty() {
                    self.status = "Save canceled".to_owned();
                } else {
                    self.save_to(PathBuf::from(input));
                }
            }
            KeyCode::Escape => self.cancel_prompt(),
            _ if key.is_ctrl('c') => self.cancel_prompt(),
            KeyCode::Backspace => {
                self.prompt.pop();
            }
            KeyCode::Char(ch) if !key.control() => self.prompt.push(ch),
            _ => {}
        }
    }

    fn cancel_prompt(&mut self) {
        self.mode = Mode::Edit;
        self.prompt.clear();
        self.status = "Save canceled".to_owned();
    }

    fn save_to(&mut self, path: PathBuf) {
        match self.storage.save(&self.buffer, &path) {
            Ok(()) => {
                self.buffer.mark_saved();
                self.status = format!("Saved: {}", path.display());
                self.file_info = self.storage.describe(&path);
                info!(target: "termite::session", path = %path.display(), "saved");
                self.filename = Some(path);
            }
            Err(err) => {
                self.status = format!("Save failed: {}", path.display());
                warn!(target: "termite::session", error = %err, "save failed");
            }
        }
    }

    // -- Cursor and viewport ------------------------------------------------

    fn clamp_cursor(&mut self) {
        self.cursor = self.buffer.clamp(self.cursor);
    }

    fn scroll(&mut self) {
        let layout = self.layout();
        let tw = self.options.tab_width();
        let line = self.buffer.line(self.cursor.line);

        self.row_offset = clamp_offset(
            self.row_offset,
            self.cursor.line,
            layout.text_rows,
            self.buffer.line_count(),
        );
        self.col_offset = clamp_offset(
            self.col_offset,
            display_column(line, self.cursor.col, tw),
            layout.text_cols,
            display_len(line, tw) + 1,
        );
    }

    // -- Frame --------------------------------------------------------------

    /// Describe the current screen.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let layout = self.layout();
        let view = View {
            buffer: &self.buffer,
            layout,
            tab_width: self.options.tab_width(),
            cursor: self.cursor,
            selection: self.selection(),
            matches: self.search.matches(),
            row_offset: self.row_offset,
            col_offset: self.col_offset,
        };

        Frame {
            layout,
            header: self.header(),
            rows: view.rows(),
            status: self.status_line(),
            cursor: view.cursor_cell(),
        }
    }

    fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .map_or_else(|| UNTITLED.to_owned(), |p| p.display().to_string())
    }

    fn header(&self) -> String {
        let info = if self.filename.is_some() {
            self.file_info.as_str()
        } else {
            "(no-file)"
        };
        format!(
            "Termite v{} | {} {info}",
            env!("CARGO_PKG_VERSION"),
            self.display_name()
        )
    }

    /// The status row text for the current mode.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.mode {
            Mode::Search => {
                let query = String::from_utf8_lossy(self.search.query());
                match self.search.matches().len() {
                    0 => format!("Search: {query}"),
                    n => format!("Search: {query}  [{n} matches]"),
                }
            }
            Mode::Prompt => format!("Save As: {}", self.prompt),
            Mode::Edit => {
                let mut s = self.display_name();
                if self.buffer.is_modified() {
                    s.push_str(" *");
                }
                s.push_str(&format!(" | {}", self.cursor));
                if !self.status.is_empty() {
                    s.push_str(" | ");
                    s.push_str(&self.status);
                }
                if !self.last_note.is_empty() {
                    s.push_str(" | last: ");
                    s.push_str(&self.last_note);
                }
                s
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
