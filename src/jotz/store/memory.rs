use super::JournalStore;
use crate::codec::RECORD_SEPARATOR;
use crate::error::{JotzError, Result};
use std::path::PathBuf;

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    journal: String,
    keywords: String,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose journal already holds `content`, e.g. a legacy file.
    pub fn with_journal(content: impl Into<String>) -> Self {
        Self {
            journal: content.into(),
            ..Self::default()
        }
    }

    /// Makes every write fail, for testing error propagation.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(JotzError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl JournalStore for InMemoryStore {
    fn read_journal(&self) -> Result<String> {
        Ok(self.journal.clone())
    }

    fn append_journal(&mut self, fragment: &str) -> Result<()> {
        self.check_writable()?;
        self.journal.push_str(RECORD_SEPARATOR);
        self.journal.push_str(fragment);
        Ok(())
    }

    fn replace_journal(&mut self, content: &str) -> Result<()> {
        self.check_writable()?;
        self.journal = content.to_string();
        Ok(())
    }

    fn read_keywords(&self) -> Result<String> {
        Ok(self.keywords.clone())
    }

    fn write_keywords(&mut self, content: &str) -> Result<()> {
        self.check_writable()?;
        self.keywords = content.to_string();
        Ok(())
    }

    fn journal_path(&self) -> PathBuf {
        PathBuf::from("memory://journal")
    }
}
