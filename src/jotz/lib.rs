//! # Jotz Architecture
//!
//! Jotz is a plain-text journal: entries are appended to a single file with a
//! date tag, and found again by keyword or by day. The record format and the
//! search rules are UI agnostic; the command-line client is one consumer of
//! them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders records, handles terminal I/O  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (phrases → Keywords, clock → date)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! │  - Built on codec.rs (format) and rank.rs (search)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - JournalStore trait: moves text, knows no format          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing prints, exits, or assumes a terminal. Logging
//! goes through `tracing`; the binary decides whether anything listens.
//!
//! ## Testing Strategy
//!
//! 1. **Codec and rank** (`codec.rs`, `rank.rs`): pure functions, tested on
//!    literal journal text including legacy and malformed fragments.
//! 2. **Commands** (`commands/*.rs`): business rules against `InMemoryStore`.
//! 3. **API** (`api.rs`): dispatch and input normalization.
//! 4. **CLI** (`tests/cli.rs`): the binary end to end in a temporary data
//!    directory.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade for all operations
//! - [`codec`]: On-disk record format
//! - [`rank`]: Keyword matching, ordering, highlighting
//! - [`commands`]: Business logic per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record` and `Keywords`
//! - [`config`]: `config.json` settings
//! - [`capabilities`]: Interfaces for mood and speech services
//! - [`error`]: Error types

pub mod api;
pub mod capabilities;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod rank;
pub mod store;
