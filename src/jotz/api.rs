//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! jotz operation, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*` function
//! - **Normalizes inputs**: search phrases become [`Keywords`], wall-clock
//!   time becomes a date in the configured zone, saved-keyword selectors are
//!   resolved against the keyword file
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! It holds no session state. "What was last searched" is the caller's to
//! remember and pass back in (see [`JotzApi::speak`]).
//!
//! `JotzApi<S: JournalStore>` is generic over storage: `FileStore` in
//! production, `InMemoryStore` in tests.

use crate::capabilities::{MoodClassifier, SpeechSynthesizer};
use crate::commands;
use crate::config::JotzConfig;
use crate::error::{JotzError, Result};
use crate::model::{Keywords, Record};
use crate::store::JournalStore;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::path::{Path, PathBuf};

pub struct JotzApi<S: JournalStore> {
    store: S,
    config: JotzConfig,
    config_dir: PathBuf,
}

impl<S: JournalStore> JotzApi<S> {
    pub fn new(store: S, config: JotzConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn save_entry(&mut self, body: &str, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        let local = self.config.local_time(now)?;
        commands::save::run(&mut self.store, body, &local)
    }

    pub fn search(&self, phrase: &str) -> Result<commands::CmdResult> {
        let keywords = Keywords::parse(phrase)?;
        self.search_keywords(&keywords)
    }

    pub fn search_keywords(&self, keywords: &Keywords) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, keywords)
    }

    /// Searches by a saved keyword, picked by 1-based number or by name.
    pub fn search_saved(&self, selector: &str) -> Result<commands::CmdResult> {
        let keyword = commands::keywords::resolve(&self.store, selector)?
            .ok_or_else(|| JotzError::Api(format!("No saved keyword matches '{}'", selector)))?;
        commands::search::run_saved(&self.store, &keyword)
    }

    pub fn records_on(&self, date: NaiveDate) -> Result<commands::CmdResult> {
        commands::day::run(&self.store, date)
    }

    pub fn today(&self, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        self.records_on(self.config.local_date(now)?)
    }

    pub fn yesterday(&self, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        let today = self.config.local_date(now)?;
        let yesterday = today
            .checked_sub_signed(Duration::days(1))
            .ok_or_else(|| JotzError::Api(format!("No day before {}", today)))?;
        self.records_on(yesterday)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn keywords(&self) -> Result<commands::CmdResult> {
        commands::keywords::show(&self.store)
    }

    pub fn save_keywords<K: AsRef<str>>(&mut self, keywords: &[K]) -> Result<commands::CmdResult> {
        commands::keywords::save(&mut self.store, keywords)
    }

    pub fn dedup(&mut self) -> Result<commands::CmdResult> {
        commands::dedup::run(&mut self.store)
    }

    pub fn export(&self, dest: Option<&Path>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, dest)
    }

    /// Reads displayed records aloud. `shown` is whatever the UI last
    /// listed, highlighted or not.
    pub fn speak<T: SpeechSynthesizer + ?Sized>(
        &self,
        synth: &T,
        shown: &[Record],
        highlight: Option<&Keywords>,
    ) -> Result<commands::CmdResult> {
        let marker = self.config.marker();
        let text = match highlight {
            Some(keywords) => shown
                .iter()
                .map(|r| crate::rank::highlight(r.body.trim(), keywords, &marker))
                .collect::<Vec<_>>()
                .join("\n\n"),
            None => commands::speak::records_text(shown),
        };
        commands::speak::run(synth, &text, &marker)
    }

    pub fn mood<C: MoodClassifier + ?Sized>(
        &self,
        classifier: &C,
        first: &str,
        second: &str,
    ) -> Result<commands::CmdResult> {
        commands::mood::run(classifier, first, second)
    }

    pub fn configure(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config(&self) -> &JotzConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{MoodLabel, MoodReading};
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn api(journal: &str) -> (JotzApi<InMemoryStore>, TempDir) {
        let dir = TempDir::new().unwrap();
        let config = JotzConfig {
            utc_offset: Some("-06:00".into()),
            ..JotzConfig::default()
        };
        let api = JotzApi::new(
            InMemoryStore::with_journal(journal),
            config,
            dir.path().to_path_buf(),
        );
        (api, dir)
    }

    fn bodies(result: &CmdResult) -> Vec<&str> {
        result.listed_records.iter().map(|r| r.body.as_str()).collect()
    }

    #[test]
    fn save_entry_dates_in_configured_zone() {
        let (mut api, _dir) = api("");
        // 03:00 UTC on the 2nd is still the 1st at -06:00.
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 0, 0).unwrap();
        api.save_entry("late night", now).unwrap();

        assert_eq!(api.store().read_journal().unwrap(), "\n\n{late night}[2024:01:01]");
        let today = api.today(now).unwrap();
        assert_eq!(bodies(&today), vec!["late night"]);
    }

    #[test]
    fn yesterday_is_one_local_day_back() {
        let (api, _dir) = api("\n\n{then}[2024:01:01]\n\n{now}[2024:01:02]");
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 18, 0, 0).unwrap();
        assert_eq!(bodies(&api.yesterday(now).unwrap()), vec!["then"]);
    }

    #[test]
    fn search_parses_phrase() {
        let (api, _dir) = api("\n\n{Apple pie}[2024:01:01]\n\n{apple}[2024:01:01]");
        let result = api.search("APPLE pie").unwrap();
        assert_eq!(bodies(&result), vec!["Apple pie"]);
    }

    #[test]
    fn blank_search_is_an_error() {
        let (api, _dir) = api("");
        assert!(api.search("   ").is_err());
    }

    #[test]
    fn search_saved_resolves_number_and_name() {
        let (mut api, _dir) = api("\n\n{gym day}[2024:01:01]\n\n{work}[2024:01:01]");
        api.save_keywords(&["work", "gym"]).unwrap();

        assert_eq!(bodies(&api.search_saved("2").unwrap()), vec!["gym day"]);
        assert_eq!(bodies(&api.search_saved("WORK").unwrap()), vec!["work"]);
        assert!(api.search_saved("3").is_err());
    }

    #[test]
    fn speak_reads_highlighted_results_plainly() {
        struct Echo;
        impl SpeechSynthesizer for Echo {
            fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
                Ok(text.as_bytes().to_vec())
            }
        }

        let (api, _dir) = api("\n\n{# Pie *day*}[2024:01:01]");
        let found = api.search("pie").unwrap();
        let result = api
            .speak(&Echo, &found.listed_records, found.highlight.as_ref())
            .unwrap();
        assert_eq!(result.audio.unwrap(), b" Pie day".to_vec());
    }

    #[test]
    fn mood_dispatches_to_classifier() {
        struct Calm;
        impl MoodClassifier for Calm {
            fn classify(&self, _: &str, _: &str) -> Result<MoodReading> {
                Ok(MoodReading {
                    label: MoodLabel::Neutral,
                    polarity: 0.0,
                })
            }
        }

        let (api, _dir) = api("");
        let result = api.mood(&Calm, "fine", "nothing much").unwrap();
        assert_eq!(result.mood.map(|m| m.label), Some(MoodLabel::Neutral));
    }

    #[test]
    fn configure_writes_to_config_dir() {
        let (api, dir) = api("");
        api.configure(ConfigAction::Set("highlight-open".into(), "[".into()))
            .unwrap();
        assert_eq!(JotzConfig::load(dir.path()).unwrap().highlight_open, "[");
    }
}
