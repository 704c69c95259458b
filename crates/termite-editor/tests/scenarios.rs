//! End-to-end editing scenarios: raw bytes in, buffer and frame out.

use pretty_assertions::assert_eq;
use termite_editor::{
    Action, EditorSession, MemoryStorage, Mode, NullLog, Position, TextBuffer,
};
use termite_editor::syntax::Highlight;
use termite_term::{KeyCode, KeyDecoder, KeyEvent, Modifiers, ScriptedSource, Size};

type Session = EditorSession<MemoryStorage, Vec<String>>;

fn session(lines: &[&str]) -> Session {
    EditorSession::new(MemoryStorage::new(), Vec::new()).with_buffer(TextBuffer::from_lines(lines))
}

fn lines(s: &Session) -> Vec<String> {
    s.buffer()
        .lines()
        .iter()
        .map(|l| String::from_utf8_lossy(l).into_owned())
        .collect()
}

/// Decode `bytes` and feed every key to the session, stopping on quit.
fn feed(s: &mut Session, bytes: &[u8]) -> Action {
    for key in KeyDecoder::new(ScriptedSource::from_bytes(bytes)) {
        if s.handle(key) == Action::Quit {
            return Action::Quit;
        }
    }
    Action::Continue
}

// ---------------------------------------------------------------------------
// Documented scenarios
// ---------------------------------------------------------------------------

#[test]
fn enter_at_end_of_first_line() {
    let mut s = session(&["abc", "def"]);
    feed(&mut s, b"\x1b[F\r");
    assert_eq!(lines(&s), vec!["abc", "", "def"]);
    assert_eq!(s.cursor(), Position::new(1, 0));
}

#[test]
fn search_for_world() {
    let mut s = session(&["hello world"]);
    feed(&mut s, b"\x06world");
    assert_eq!(s.search().matches().len(), 1);
    let m = s.search().matches()[0];
    assert_eq!((m.line, m.start, m.end), (0, 6, 11));
    assert_eq!(s.cursor(), Position::new(0, 6));
}

#[test]
fn shift_select_then_backspace() {
    let mut s = session(&["abcdef"]);
    feed(&mut s, b"\x1b[1;2C\x1b[1;2C\x1b[1;2C\x7f");
    assert_eq!(lines(&s), vec!["def"]);
    assert_eq!(s.cursor(), Position::new(0, 0));
}

#[test]
fn paste_multi_line_into_empty_line() {
    let mut s = session(&["x", "y"]);
    // Cut "x\ny" so the document is one empty line, then paste it back.
    feed(&mut s, b"\x1b[1;2B\x1b[1;2C\x18");
    assert_eq!(s.clipboard().content(), b"x\ny");
    assert_eq!(lines(&s), vec![""]);
    assert_eq!(s.cursor(), Position::new(0, 0));

    feed(&mut s, b"\x16");
    assert_eq!(lines(&s), vec!["x", "y"]);
    assert_eq!(s.cursor(), Position::new(1, 1));
}

// ---------------------------------------------------------------------------
// Invariants over key sequences
// ---------------------------------------------------------------------------

#[test]
fn buffer_never_empty_and_cursor_always_valid() {
    let mut s = session(&["one", "two", "three"]);
    let script: &[u8] = b"\x0b\x0b\x0b\x0b\x1b[B\x7f\x7f\x1b[3~abc\r\r\x1b[A\x0b\x1b[1;5F\x7f";
    for key in KeyDecoder::new(ScriptedSource::from_bytes(script)) {
        s.handle(key);
        let c = s.cursor();
        assert!(s.buffer().line_count() >= 1);
        assert!(c.line < s.buffer().line_count());
        assert!(c.col <= s.buffer().line_len(c.line));
    }
}

#[test]
fn split_then_join_restores_line() {
    let mut s = session(&["hello world"]);
    feed(&mut s, b"\x1b[C\x1b[C\x1b[C\r\x7f");
    assert_eq!(lines(&s), vec!["hello world"]);
    assert_eq!(s.cursor(), Position::new(0, 3));
}

#[test]
fn cursor_stays_visible_through_long_moves() {
    let text: Vec<String> = (0..300).map(|i| format!("line {i}\t{}", "x".repeat(i % 90))).collect();
    let refs: Vec<&str> = text.iter().map(String::as_str).collect();
    let mut s = session(&refs);
    s.resize(Size::new(40, 10));

    let moves: &[u8] = b"\x1b[6~\x1b[6~\x1b[F\x1b[1;5B\x1b[1;5B\x1b[5~\x1b[H\x1b[1;5F\x1b[1;5H";
    for key in KeyDecoder::new(ScriptedSource::from_bytes(moves)) {
        s.handle(key);
        let frame = s.frame();
        let (row, col) = frame.cursor;
        let (row_off, _) = s.offsets();
        assert!(row >= 1 && row <= frame.layout.text_rows);
        assert!(col >= frame.layout.gutter() && col < frame.layout.cols);
        assert_eq!(row, 1 + s.cursor().line - row_off);
    }
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[test]
fn lone_escape_cancels_search() {
    let mut s = session(&["abc"]);
    feed(&mut s, b"\x06b\x1b");
    assert_eq!(s.mode(), Mode::Edit);
    assert_eq!(s.status(), "Press Ctrl-Q to quit");
    assert_eq!(s.cursor(), Position::new(0, 1));
}

#[test]
fn save_as_prompt_round_trip() {
    let mut s = session(&["draft"]);
    feed(&mut s, b"!\x13notes.txt\r");
    assert_eq!(s.status(), "Saved: notes.txt");
    assert_eq!(s.storage().file("notes.txt"), Some(&b"!draft\n"[..]));
    assert!(!s.status_line().contains('*'));
}

#[test]
fn quit_stops_the_loop_early() {
    let mut s = session(&["abc"]);
    assert_eq!(feed(&mut s, b"x\x11y"), Action::Quit);
    assert_eq!(lines(&s), vec!["xabc"]);
}

#[test]
fn unknown_sequence_keeps_selection() {
    let mut s = session(&["abcdef"]);
    feed(&mut s, b"\x1b[1;2C\x1b[1;2C\x1b[9z");
    assert!(s.selection().is_some());
    s.handle(KeyEvent::new(KeyCode::Char('Z'), Modifiers::SHIFT));
    assert_eq!(lines(&s), vec!["Zcdef"]);
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

#[test]
fn frame_classifies_selection_over_match_over_keyword() {
    let mut s = session(&["return x"]);
    feed(&mut s, b"\x06ret\r\x1b[H\x1b[1;2C");

    let frame = s.frame();
    let row = &frame.rows[0];
    assert_eq!(row.number, Some(1));
    let kinds: Vec<_> = row.spans.iter().map(|sp| (sp.kind, sp.start, sp.end)).collect();
    assert_eq!(
        kinds,
        vec![
            (Highlight::Selection, 0, 1),
            (Highlight::Match, 1, 3),
            (Highlight::Keyword, 3, 6),
            (Highlight::Normal, 6, 8),
        ]
    );
    assert!(frame.rows[1].number.is_none());
}

#[test]
fn open_through_memory_storage() {
    let storage = MemoryStorage::new().with_file("src.c", b"int main() {\r\n  return 0;\r\n}\n".to_vec());
    let mut s = EditorSession::new(storage, NullLog);
    s.open("src.c");
    assert_eq!(s.buffer().line_count(), 3);
    assert_eq!(s.buffer().line(1), b"  return 0;");
    assert_eq!(s.status(), "Opened: src.c");
}
