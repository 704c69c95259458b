//! Debug notes.
//!
//! The session records short notes about what it did ("Ctrl-G", "no
//! match") through an injected [`DebugLog`]. The session also keeps the
//! most recent note itself to show in the status line; the log decides
//! where the rest go.

use tracing::debug;

/// Sink for debug notes.
pub trait DebugLog {
    fn note(&mut self, note: &str);
}

/// Forwards notes to `tracing` under the `termite::session` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DebugLog for TracingLog {
    fn note(&mut self, note: &str) {
        debug!(target: "termite::session", note, "debug note");
    }
}

/// Discards notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl DebugLog for NullLog {
    fn note(&mut self, _note: &str) {}
}

/// Collects notes in memory.
impl DebugLog for Vec<String> {
    fn note(&mut self, note: &str) {
        self.push(note.to_owned());
    }
}

impl<L: DebugLog + ?Sized> DebugLog for Box<L> {
    fn note(&mut self, note: &str) {
        (**self).note(note);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
