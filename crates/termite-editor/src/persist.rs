//! Persistence: loading and saving documents.
//!
//! The session talks to storage only through [`Persistence`], at open and
//! save time. Failures come back as [`PersistError`] and the session
//! turns them into a status message; they never abort editing.
//!
//! [`FileStorage`] is the real filesystem. [`MemoryStorage`] keeps files
//! in a map and can be told to fail, for driving the session in tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::buffer::TextBuffer;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PersistError {
    /// The path the failed operation was aimed at.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// Storage collaborator for an editor session.
pub trait Persistence {
    /// Raw content of the file at `path`.
    ///
    /// # Errors
    ///
    /// [`PersistError::Read`] if the file cannot be read.
    fn load(&mut self, path: &Path) -> Result<Vec<u8>, PersistError>;

    /// Write `buffer` to `path`, replacing any existing content.
    ///
    /// # Errors
    ///
    /// [`PersistError::Write`] if the file cannot be written.
    fn save(&mut self, buffer: &TextBuffer, path: &Path) -> Result<(), PersistError>;

    /// Short description of the file for the header row, such as a
    /// `-rw-r--r--` permission string.
    fn describe(&self, path: &Path) -> String;
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&mut self, path: &Path) -> Result<Vec<u8>, PersistError> {
        (**self).load(path)
    }

    fn save(&mut self, buffer: &TextBuffer, path: &Path) -> Result<(), PersistError> {
        (**self).save(buffer, path)
    }

    fn describe(&self, path: &Path) -> String {
        (**self).describe(path)
    }
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// Reads and writes real files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl Persistence for FileStorage {
    fn load(&mut self, path: &Path) -> Result<Vec<u8>, PersistError> {
        let bytes = fs::read(path).map_err(|source| {
            warn!(target: "termite::persist", path = %path.display(), %source, "load failed");
            PersistError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(target: "termite::persist", path = %path.display(), bytes = bytes.len(), "loaded");
        Ok(bytes)
    }

    fn save(&mut self, buffer: &TextBuffer, path: &Path) -> Result<(), PersistError> {
        let content = buffer.to_text();
        fs::write(path, &content).map_err(|source| {
            warn!(target: "termite::persist", path = %path.display(), %source, "save failed");
            PersistError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(target: "termite::persist", path = %path.display(), bytes = content.len(), "saved");
        Ok(())
    }

    fn describe(&self, path: &Path) -> String {
        describe_file(path)
    }
}

/// `ls -l` style type and permission string, e.g. `-rw-r--r--`.
#[cfg(unix)]
#[must_use]
pub fn describe_file(path: &Path) -> String {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let Ok(meta) = fs::metadata(path) else {
        return "(stat-failed)".to_owned();
    };

    let ft = meta.file_type();
    let kind = if ft.is_dir() {
        'd'
    } else if ft.is_char_device() {
        'c'
    } else if ft.is_block_device() {
        'b'
    } else if ft.is_fifo() {
        'p'
    } else if ft.is_socket() {
        's'
    } else {
        '-'
    };

    let mode = meta.permissions().mode();
    let mut out = String::with_capacity(10);
    out.push(kind);
    for (bit, ch) in [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ] {
        out.push(if mode & bit == 0 { '-' } else { ch });
    }
    out
}

#[cfg(not(unix))]
#[must_use]
pub fn describe_file(_path: &Path) -> String {
    "(perms N/A)".to_owned()
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory files keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: HashMap<PathBuf, Vec<u8>>,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Make every save fail, as a read-only disk would.
    #[must_use]
    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Content stored at `path`.
    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }
}

impl Persistence for MemoryStorage {
    fn load(&mut self, path: &Path) -> Result<Vec<u8>, PersistError> {
        self.files.get(path).cloned().ok_or_else(|| PersistError::Read {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }

    fn save(&mut self, buffer: &TextBuffer, path: &Path) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::Write {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        self.files.insert(path.to_path_buf(), buffer.to_text());
        Ok(())
    }

    fn describe(&self, path: &Path) -> String {
        if self.files.contains_key(path) {
            "-rw-r--r--".to_owned()
        } else {
            "(stat-failed)".to_owned()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
