//! Session modes and the per-key outcome.
//!
//! The session is always in exactly one [`Mode`], and each mode decides
//! how a key is interpreted:
//!
//! | Mode   | Keys go to                     | Status line            |
//! |--------|--------------------------------|------------------------|
//! | Edit   | the buffer and cursor          | file, position, notes  |
//! | Search | the query; Up/Down cycle hits  | `Search: <query>`      |
//! | Prompt | a one-line text input          | `Save As: <input>`     |
//!
//! Search and Prompt always return to Edit on Enter or Escape. Nothing
//! blocks: each mode handles one key and gives control back.

/// The current input mode. Pure data; the dispatch lives in the session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Edit,
    Search,
    Prompt,
}

impl Mode {
    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Search => "search",
            Self::Prompt => "prompt",
        }
    }

    /// True if keys edit a one-line input rather than the document.
    #[inline]
    #[must_use]
    pub const fn is_input(self) -> bool {
        matches!(self, Self::Search | Self::Prompt)
    }
}

/// What the caller's loop does after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Paint and read the next key.
    Continue,
    /// Leave the loop.
    Quit,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_edit() {
        assert_eq!(Mode::default(), Mode::Edit);
    }

    #[test]
    fn input_modes() {
        assert!(!Mode::Edit.is_input());
        assert!(Mode::Search.is_input());
        assert!(Mode::Prompt.is_input());
    }

    #[test]
    fn names() {
        assert_eq!(Mode::Edit.name(), "edit");
        assert_eq!(Mode::Search.name(), "search");
        assert_eq!(Mode::Prompt.name(), "prompt");
    }
}
