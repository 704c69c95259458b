// SPDX-License-Identifier: MIT
//
// Log file setup.
//
// The terminal is in raw mode on the alternate screen while the editor
// runs, so logs go to a file only. The filter comes from `TERMITE_LOG`
// (`EnvFilter` syntax, e.g. `termite::session=debug`) and defaults to
// `info`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const ENV_VAR: &str = "TERMITE_LOG";
const DEFAULT_FILTER: &str = "info";
const FILE_NAME: &str = "termite.log";

/// Where the log goes when neither the CLI nor the config names a file.
#[must_use]
pub fn default_path() -> PathBuf {
    dirs::cache_dir()
        .map_or_else(|| PathBuf::from("."), |dir| dir.join("termite"))
        .join(FILE_NAME)
}

/// Build the filter from `TERMITE_LOG`, falling back to `info`.
#[must_use]
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`.
///
/// The returned guard flushes the writer on drop; keep it alive for the
/// whole run.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a subscriber is
/// already installed.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .map_or_else(|| FILE_NAME.into(), |n| n.to_os_string());

    fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing tracing subscriber")?;

    Ok(guard)
}
