//! # Jotz CLI
//!
//! The binary is thin: the CLI lives in `src/jotz/cli/`, and this file only
//! invokes `cli::run()` and turns an error into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/jotz/cli/)                                  │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with colored (render.rs)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                    jotz::api::JotzApi
//! ```
//!
//! Everything past the API is UI agnostic. The CLI owns argument parsing,
//! context initialization (data directory, config, logging), dispatch, and
//! rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
