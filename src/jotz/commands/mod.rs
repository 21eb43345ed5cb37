//! # Command Layer
//!
//! One module per user-facing operation. Every command takes its store and
//! inputs as plain arguments, returns a [`CmdResult`], and never prints.
//! Session state such as "what is in the search box" belongs to the caller.

use crate::capabilities::MoodReading;
use crate::config::JotzConfig;
use crate::model::{Keywords, Record};
use std::path::PathBuf;

pub mod config;
pub mod day;
pub mod dedup;
pub mod export;
pub mod helpers;
pub mod keywords;
pub mod list;
pub mod mood;
pub mod save;
pub mod search;
pub mod speak;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records to display, already in display order.
    pub listed_records: Vec<Record>,
    /// Records written by the command.
    pub affected_records: Vec<Record>,
    /// Keywords the display layer should highlight in `listed_records`.
    pub highlight: Option<Keywords>,
    pub keywords: Vec<String>,
    /// Raw journal text, when exporting to stdout.
    pub exported: Option<String>,
    pub export_path: Option<PathBuf>,
    pub config: Option<JotzConfig>,
    pub config_values: Vec<(String, String)>,
    pub mood: Option<MoodReading>,
    pub audio: Option<Vec<u8>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_highlight(mut self, keywords: Keywords) -> Self {
        self.highlight = Some(keywords);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_config(mut self, config: JotzConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when nothing was written to the journal.
    pub fn nothing_written(&self) -> bool {
        self.affected_records.is_empty()
    }
}
