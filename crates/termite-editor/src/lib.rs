//! # termite-editor: editing core for termite
//!
//! Everything here is terminal-independent. The session takes one logical
//! key at a time and describes the screen as a [`frame::Frame`]; painting
//! it is the binary's job.
//!
//! - **[`position`]**: `Position` (line, col) and `Range`, 0-indexed
//! - **[`buffer`]**: `TextBuffer`, lines of bytes with clamping edits
//! - **[`column`]**: tab expansion and the viewport clamp
//! - **[`word`]**: character classes and word motions
//! - **[`search`]**: literal incremental search
//! - **[`clipboard`]**: the single copy/paste slot
//! - **[`syntax`]**: highlight kinds and the keyword tagger
//! - **[`log`]**: the injected debug-note sink
//! - **[`persist`]**: loading and saving through a `Persistence` trait
//! - **[`options`]**: tab width, jump size, gutter digits
//! - **[`frame`]**: layout and the frame description
//! - **[`mode`]**: `Mode` and the per-key `Action`
//! - **[`session`]**: `EditorSession`, the key-driven state machine

pub mod buffer;
pub mod clipboard;
pub mod column;
pub mod frame;
pub mod log;
pub mod mode;
pub mod options;
pub mod persist;
pub mod position;
pub mod search;
pub mod session;
pub mod syntax;
pub mod word;

pub use buffer::TextBuffer;
pub use frame::{Frame, FrameRow, Layout};
pub use log::{DebugLog, NullLog, TracingLog};
pub use mode::{Action, Mode};
pub use options::EditorOptions;
pub use persist::{FileStorage, MemoryStorage, PersistError, Persistence};
pub use position::{Position, Range};
pub use session::EditorSession;
