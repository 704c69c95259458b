// SPDX-License-Identifier: MIT
//
// termite: a small terminal text editor.
//
// This is the binary that wires the two crates together:
//
//   termite-term   → raw mode, key decoding, ANSI helpers
//   termite-editor → buffer, session state machine, frame description
//
// The loop is caller-driven. Each iteration paints the session's frame,
// blocks for one decoded key, and hands it to the session:
//
//   stdin → StdinSource → KeyDecoder → EditorSession::handle
//   EditorSession::frame → Renderer → stdout
//
// Layout:
//
//   ┌──────────────────────────────┐
//   │ header (name, file, perms)   │  ← 1 row
//   ├──────────────────────────────┤
//   │ gutter | text                │  ← h - 2 rows
//   ├──────────────────────────────┤
//   │ status line                  │  ← 1 row
//   └──────────────────────────────┘

mod config;
mod logging;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use termite_editor::{Action, EditorSession, FileStorage, TracingLog};
use termite_term::terminal::is_tty;
use termite_term::{KeyDecoder, StdinSource, Terminal};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::render::Renderer;

type Session = EditorSession<FileStorage, TracingLog>;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "termite", version, about = "A small terminal text editor")]
struct Cli {
    /// File to open. Created on first save if it does not exist.
    file: Option<PathBuf>,

    /// Configuration file (overrides discovery of `termite.toml`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (overrides `[log] file` in the configuration).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn log_path(&self, config: &Config) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| config.log.file.clone())
            .unwrap_or_else(logging::default_path)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref());

    // Logging is optional; a bad log path should not stop the editor.
    let _log_guard = match logging::init(&cli.log_path(&config)) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("termite: logging disabled: {err:#}");
            None
        }
    };
    info!(target: "termite::main", version = env!("CARGO_PKG_VERSION"), "starting");

    if !is_tty() {
        bail!("stdin is not a terminal");
    }

    let mut session = Session::new(FileStorage, TracingLog).with_options(config.editor_options());
    if let Some(path) = cli.file {
        session.open(path);
    }

    let mut keys = KeyDecoder::new(StdinSource::new(config.escape_timeout()));
    let mut term = Terminal::new();
    term.enter().context("entering raw mode")?;

    let result = run(&mut term, &mut session, &mut keys);

    term.leave().context("restoring terminal")?;
    if let Err(err) = &result {
        warn!(target: "termite::main", error = %err, "exiting on error");
    }
    info!(target: "termite::main", "bye");
    result
}

/// Paint, read one key, apply it. Returns when the session quits or
/// stdin closes.
fn run(term: &mut Terminal, session: &mut Session, keys: &mut KeyDecoder<StdinSource>) -> Result<()> {
    let mut renderer = Renderer::new();
    let mut size = term.size();
    session.resize(size);

    loop {
        let current = term.refresh_size();
        if current != size {
            size = current;
            session.resize(size);
        }

        renderer
            .paint(&session.frame(), &mut io::stdout().lock())
            .context("painting frame")?;

        let Some(key) = keys.read_key() else {
            debug!(target: "termite::main", "input closed");
            return Ok(());
        };
        if session.handle(key) == Action::Quit {
            return Ok(());
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
