//! Clipboard: the single process-scoped copy/paste slot.
//!
//! Every copy overwrites it; paste reads it without clearing. Multi-line
//! spans are stored with `\n` between lines and no trailing `\n` after
//! the final partial line, so pasting reproduces the exact span.

/// Holds the most recently copied text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    content: Vec<u8>,
}

impl Clipboard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content: Vec::new(),
        }
    }

    /// Replace the content.
    pub fn set(&mut self, text: Vec<u8>) {
        self.content = text;
    }

    /// The stored text. Empty if nothing has been copied.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// True if there is nothing to paste.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let clip = Clipboard::new();
        assert!(clip.is_empty());
        assert_eq!(clip.content(), b"");
    }

    #[test]
    fn set_overwrites() {
        let mut clip = Clipboard::new();
        clip.set(b"first".to_vec());
        clip.set(b"x\ny".to_vec());
        assert_eq!(clip.content(), b"x\ny");
        assert!(!clip.is_empty());
    }

    #[test]
    fn reading_does_not_clear() {
        let mut clip = Clipboard::default();
        clip.set(b"keep".to_vec());
        let _ = clip.content();
        assert_eq!(clip.content(), b"keep");
    }
}
