//! # Configuration
//!
//! Settings live in `config.json` inside the jotz data directory. A missing
//! file means defaults; unknown keys are ignored.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `journal_file` | `journal.txt` | File the records are appended to |
//! | `keywords_file` | `keywords.txt` | Saved keyword list, one per line |
//! | `utc_offset` | *(system zone)* | Zone used to date entries, e.g. `-06:00` |
//! | `highlight_open` | `<mark>` | Text inserted before a highlighted keyword |
//! | `highlight_close` | `</mark>` | Text inserted after a highlighted keyword |

use crate::error::{JotzError, Result};
use crate::rank::Marker;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_JOURNAL_FILE: &str = "journal.txt";
const DEFAULT_KEYWORDS_FILE: &str = "keywords.txt";

pub const CONFIG_KEYS: &[&str] = &[
    "journal-file",
    "keywords-file",
    "utc-offset",
    "highlight-open",
    "highlight-close",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotzConfig {
    #[serde(default = "default_journal_file")]
    pub journal_file: String,

    #[serde(default = "default_keywords_file")]
    pub keywords_file: String,

    /// Fixed offset such as `-06:00`. `None` follows the system time zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,

    #[serde(default = "default_highlight_open")]
    pub highlight_open: String,

    #[serde(default = "default_highlight_close")]
    pub highlight_close: String,
}

fn default_journal_file() -> String {
    DEFAULT_JOURNAL_FILE.to_string()
}

fn default_keywords_file() -> String {
    DEFAULT_KEYWORDS_FILE.to_string()
}

fn default_highlight_open() -> String {
    Marker::default().open
}

fn default_highlight_close() -> String {
    Marker::default().close
}

impl Default for JotzConfig {
    fn default() -> Self {
        Self {
            journal_file: default_journal_file(),
            keywords_file: default_keywords_file(),
            utc_offset: None,
            highlight_open: default_highlight_open(),
            highlight_close: default_highlight_close(),
        }
    }
}

impl JotzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotzError::Io)?;
        let config: JotzConfig =
            serde_json::from_str(&content).map_err(JotzError::Serialization)?;
        config.offset()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotzError::Serialization)?;
        fs::write(config_path, content).map_err(JotzError::Io)?;
        Ok(())
    }

    pub fn marker(&self) -> Marker {
        Marker::new(self.highlight_open.clone(), self.highlight_close.clone())
    }

    /// The configured fixed offset, if any.
    pub fn offset(&self) -> Result<Option<FixedOffset>> {
        self.utc_offset.as_deref().map(parse_offset).transpose()
    }

    /// `now` expressed in the configured zone.
    pub fn local_time(&self, now: DateTime<Utc>) -> Result<DateTime<FixedOffset>> {
        Ok(match self.offset()? {
            Some(offset) => now.with_timezone(&offset),
            None => now.with_timezone(&Local).fixed_offset(),
        })
    }

    /// Calendar date of `now` in the configured zone.
    pub fn local_date(&self, now: DateTime<Utc>) -> Result<NaiveDate> {
        Ok(self.local_time(now)?.date_naive())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        Ok(match key {
            "journal-file" => self.journal_file.clone(),
            "keywords-file" => self.keywords_file.clone(),
            "utc-offset" => self.utc_offset.clone().unwrap_or_else(|| "local".into()),
            "highlight-open" => self.highlight_open.clone(),
            "highlight-close" => self.highlight_close.clone(),
            other => return Err(unknown_key(other)),
        })
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "journal-file" => self.journal_file = file_name(key, value)?,
            "keywords-file" => self.keywords_file = file_name(key, value)?,
            "utc-offset" => {
                self.utc_offset = if value.eq_ignore_ascii_case("local") {
                    None
                } else {
                    parse_offset(value)?;
                    Some(value.trim().to_string())
                }
            }
            "highlight-open" => self.highlight_open = value.to_string(),
            "highlight-close" => self.highlight_close = value.to_string(),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

/// Parses `±HH:MM` (or `Z`) into a fixed offset.
pub fn parse_offset(value: &str) -> Result<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value == "+00:00" || value == "-00:00" {
        return FixedOffset::east_opt(0).ok_or_else(|| bad_offset(value));
    }

    let (sign, rest) = match value.as_bytes().first() {
        Some(b'+') => (1, &value[1..]),
        Some(b'-') => (-1, &value[1..]),
        _ => return Err(bad_offset(value)),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(|| bad_offset(value))?;
    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
    if !two_digits(hours) || !two_digits(minutes) {
        return Err(bad_offset(value));
    }
    let hours: i32 = hours.parse().map_err(|_| bad_offset(value))?;
    let minutes: i32 = minutes.parse().map_err(|_| bad_offset(value))?;
    if hours > 23 || !(0..60).contains(&minutes) {
        return Err(bad_offset(value));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(|| bad_offset(value))
}

fn file_name(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() || value.contains(['/', '\\']) {
        return Err(JotzError::Config(format!(
            "{} must be a plain file name, got '{}'",
            key, value
        )));
    }
    Ok(value.to_string())
}

fn bad_offset(value: &str) -> JotzError {
    JotzError::Config(format!(
        "Invalid utc-offset '{}': expected ±HH:MM or 'local'",
        value
    ))
}

fn unknown_key(key: &str) -> JotzError {
    JotzError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
