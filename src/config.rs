// SPDX-License-Identifier: MIT
//
// `termite.toml` loading.
//
// Discovery order: `--config PATH`, then `termite.toml` in the working
// directory, then `<config_dir>/termite/termite.toml`. A missing file
// means defaults. A file that fails to parse also means defaults, with a
// warning in the log; the editor never refuses to start over config.
//
// [editor]
// tab_width = 4
// jump_lines = 6
// gutter_digits = 4
//
// [input]
// escape_timeout_ms = 100
//
// [log]
// file = "/tmp/termite.log"
//
// Unknown keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use termite_editor::options::{
    DEFAULT_GUTTER_DIGITS, DEFAULT_JUMP_LINES, DEFAULT_TAB_WIDTH, EditorOptions,
};
use tracing::{debug, warn};

pub const FILE_NAME: &str = "termite.toml";

// ── Sections ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorSection {
    pub tab_width: usize,
    pub jump_lines: usize,
    pub gutter_digits: usize,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            jump_lines: DEFAULT_JUMP_LINES,
            gutter_digits: DEFAULT_GUTTER_DIGITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputSection {
    /// How long a lone ESC waits for the rest of a sequence.
    pub escape_timeout_ms: u64,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            escape_timeout_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Log file; `None` means the platform default.
    pub file: Option<PathBuf>,
}

/// Parsed `termite.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSection,
    pub input: InputSection,
    pub log: LogSection,
}

impl Config {
    /// Parse TOML text.
    ///
    /// # Errors
    ///
    /// Returns the `toml` error for malformed input or mistyped values.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Editor options, with the editor's own floors applied.
    #[must_use]
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions::new()
            .with_tab_width(self.editor.tab_width)
            .with_jump_lines(self.editor.jump_lines)
            .with_gutter_digits(self.editor.gutter_digits)
    }

    #[must_use]
    pub const fn escape_timeout(&self) -> Duration {
        Duration::from_millis(self.input.escape_timeout_ms)
    }
}

// ── Discovery ────────────────────────────────────────────────

/// First existing config file in discovery order, if any.
#[must_use]
pub fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("termite").join(FILE_NAME))
        .filter(|p| p.is_file())
}

/// Load the config at `explicit`, or the discovered one.
///
/// Never fails: unreadable or malformed files fall back to defaults.
#[must_use]
pub fn load(explicit: Option<&Path>) -> Config {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match discover() {
            Some(p) => p,
            None => return Config::default(),
        },
    };
    load_from(&path)
}

fn load_from(path: &Path) -> Config {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(target: "termite::config", path = %path.display(), %err, "config unreadable, using defaults");
            return Config::default();
        }
    };
    match Config::parse(&text) {
        Ok(config) => {
            debug!(target: "termite::config", path = %path.display(), ?config, "config loaded");
            config
        }
        Err(err) => {
            warn!(target: "termite::config", path = %path.display(), %err, "config invalid, using defaults");
            Config::default()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────
