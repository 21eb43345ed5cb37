use super::JournalStore;
use crate::codec::RECORD_SEPARATOR;
use crate::config::JotzConfig;
use crate::error::{JotzError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    journal_file: String,
    keywords_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = JotzConfig::default();
        Self {
            root,
            journal_file: defaults.journal_file,
            keywords_file: defaults.keywords_file,
        }
    }

    pub fn from_config(root: PathBuf, config: &JotzConfig) -> Self {
        Self {
            root,
            journal_file: config.journal_file.clone(),
            keywords_file: config.keywords_file.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn keywords_path(&self) -> PathBuf {
        self.root.join(&self.keywords_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(JotzError::Io)?;
        }
        Ok(())
    }

    /// Missing files read as empty. Invalid UTF-8 is replaced, not fatal.
    fn read_or_empty(path: &Path) -> Result<String> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(String::new()),
            Err(e) => return Err(JotzError::Io(e)),
        };
        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "file is not valid UTF-8, replacing unreadable bytes"
                );
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Writes through a temp file so readers never see a half-written file.
    fn write_atomic(&self, target: &Path, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let name = target
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| JotzError::Store(format!("Invalid path: {}", target.display())))?;
        let tmp = self
            .root
            .join(format!(".{}-{}.tmp", name, std::process::id()));
        fs::write(&tmp, content).map_err(JotzError::Io)?;
        fs::rename(&tmp, target).map_err(JotzError::Io)?;
        Ok(())
    }
}

impl JournalStore for FileStore {
    fn read_journal(&self) -> Result<String> {
        Self::read_or_empty(&self.journal_path())
    }

    fn append_journal(&mut self, fragment: &str) -> Result<()> {
        self.ensure_dir()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.journal_path())
            .map_err(JotzError::Io)?;
        // One write call so concurrent appenders do not interleave inside a record.
        let chunk = format!("{}{}", RECORD_SEPARATOR, fragment);
        file.write_all(chunk.as_bytes()).map_err(JotzError::Io)?;
        file.flush().map_err(JotzError::Io)?;
        tracing::info!(path = %self.journal_path().display(), bytes = chunk.len(), "appended record");
        Ok(())
    }

    fn replace_journal(&mut self, content: &str) -> Result<()> {
        self.write_atomic(&self.journal_path(), content)?;
        tracing::info!(path = %self.journal_path().display(), "rewrote journal");
        Ok(())
    }

    fn read_keywords(&self) -> Result<String> {
        Self::read_or_empty(&self.keywords_path())
    }

    fn write_keywords(&mut self, content: &str) -> Result<()> {
        self.write_atomic(&self.keywords_path(), content)
    }

    fn journal_path(&self) -> PathBuf {
        self.root.join(&self.journal_file)
    }
}
