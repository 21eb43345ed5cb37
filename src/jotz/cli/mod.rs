//! # CLI Behavior
//!
//! This is **one possible UI client** for jotz, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Writing Entries
//!
//! `jotz add` takes the entry from its arguments, joined with spaces. With no
//! arguments and piped input, the whole of stdin becomes one entry, blank
//! lines included:
//!
//! ```text
//! jotz add Bought apples at the market
//! cat notes.txt | jotz add
//! ```
//!
//! ## Reading
//!
//! - `jotz search <words>`: records containing every word, newest first
//! - `jotz today`, `jotz yesterday`, `jotz on <date>`: records of one day
//! - `jotz fav <n|name>`: search by a saved keyword
//! - `jotz list`: everything, newest first
//!
//! Naked `jotz` lists the journal.
//!
//! ## Highlighting
//!
//! On a color terminal, search hits are shown in bold yellow. Otherwise (pipes,
//! `NO_COLOR`) the configured `highlight-open`/`highlight-close` markers are
//! written around them instead.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context initialization and per-command handlers
//! - `render`: Output formatting (records, messages, colors)

mod commands;
mod render;
pub mod setup;

pub use commands::run;
