//! # Storage Layer
//!
//! jotz persists two plain UTF-8 files in its data directory:
//!
//! ```text
//! <data dir>/
//! ├── journal.txt      # every record, appended in write order
//! ├── keywords.txt     # saved keywords, one per line
//! └── config.json      # settings (see config.rs)
//! ```
//!
//! The [`JournalStore`] trait only moves text in and out of those files; the
//! record format is the codec's business and the keyword format is handled in
//! `commands::keywords`.
//!
//! ## Consistency
//!
//! Saving is append-only, and callers re-read the whole journal right after
//! appending instead of trusting what they wrote. Nothing is locked: two
//! sessions appending at once each land intact, but a re-read may or may not
//! include the other session's entry yet.
//!
//! A missing file reads as empty. Any other I/O failure is returned as is.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the real files.
//! - [`memory::InMemoryStore`]: for tests, with simulated write failures.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait JournalStore {
    /// The full journal text, or an empty string if nothing was written yet.
    fn read_journal(&self) -> Result<String>;

    /// Appends the record separator followed by `fragment`.
    fn append_journal(&mut self, fragment: &str) -> Result<()>;

    /// Replaces the whole journal. Only used by bulk maintenance.
    fn replace_journal(&mut self, content: &str) -> Result<()>;

    /// The raw keyword file, or an empty string if there is none.
    fn read_keywords(&self) -> Result<String>;

    /// Overwrites the keyword file.
    fn write_keywords(&mut self, content: &str) -> Result<()>;

    /// Where the journal lives (a virtual path for non-file stores).
    fn journal_path(&self) -> PathBuf;
}
