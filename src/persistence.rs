//! Persistence layer for UI settings
//!
//! The dashboard keeps a small amount of global UI state (theme, density,
//! search history) across runs. This module handles saving and loading
//! that state at process boundaries. The storage backend is an injected
//! dependency so tests can run against an in-memory store.

use crate::error::Result;
use crate::logging::get_logger;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistent UI settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiSettings {
    /// Color theme name
    pub theme: String,

    /// Layout density ("comfortable" or "compact")
    pub density: String,

    /// Recent ticker searches, most recent first
    pub search_history: Vec<String>,

    /// When the settings were last saved
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            density: "comfortable".to_string(),
            search_history: Vec::new(),
            updated_at: None,
        }
    }
}

/// Storage backend for settings; injected so tests can stay in memory
pub trait SettingsBackend: Send {
    /// Read the stored document, `None` when nothing was saved yet
    fn read(&self) -> Result<Option<String>>;

    /// Write the document
    fn write(&self, contents: &str) -> Result<()>;
}

/// File-backed settings storage
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the given file path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SettingsBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory settings storage for tests
#[derive(Default)]
pub struct MemoryBackend {
    contents: Mutex<Option<String>>,
}

impl SettingsBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.lock().map_or(None, |guard| guard.clone()))
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Ok(mut guard) = self.contents.lock() {
            *guard = Some(contents.to_string());
        }
        Ok(())
    }
}

/// Settings store with load/save at process boundaries
pub struct SettingsStore {
    backend: Box<dyn SettingsBackend>,
    settings: UiSettings,
    max_history: usize,
    logger: crate::logging::StructuredLogger,
}

impl SettingsStore {
    /// Create a store over an injected backend
    pub fn new(backend: Box<dyn SettingsBackend>, max_history: usize) -> Self {
        let logger = get_logger("persistence");
        Self {
            backend,
            settings: UiSettings::default(),
            max_history,
            logger,
        }
    }

    /// Convenience constructor for a file-backed store
    pub fn open_file<P: AsRef<Path>>(path: P, max_history: usize) -> Self {
        Self::new(Box::new(FileBackend::new(path)), max_history)
    }

    /// Load settings from the backend; missing data keeps the defaults
    pub fn load(&mut self) -> Result<()> {
        match self.backend.read()? {
            Some(contents) => {
                self.settings = serde_json::from_str(&contents)?;
                self.logger.info("Loaded UI settings");
            }
            None => {
                self.logger.info("No stored UI settings found, using defaults");
            }
        }
        Ok(())
    }

    /// Save settings to the backend, stamping the update time
    pub fn save(&mut self) -> Result<()> {
        self.settings.updated_at = Some(Utc::now());
        let contents = serde_json::to_string_pretty(&self.settings)?;
        self.backend.write(&contents)?;
        self.logger.debug("Saved UI settings");
        Ok(())
    }

    /// Current settings snapshot
    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    /// Set the color theme
    pub fn set_theme<S: Into<String>>(&mut self, theme: S) {
        self.settings.theme = theme.into();
    }

    /// Set the layout density
    pub fn set_density<S: Into<String>>(&mut self, density: S) {
        self.settings.density = density.into();
    }

    /// Record a search term: de-duplicated case-insensitively, moved to
    /// the front, history truncated to the configured cap. Blank terms
    /// are ignored.
    pub fn record_search(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }
        self.settings
            .search_history
            .retain(|existing| !existing.eq_ignore_ascii_case(term));
        self.settings.search_history.insert(0, term.to_string());
        self.settings.search_history.truncate(self.max_history);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = UiSettings::default();
        assert_eq!(s.theme, "dark");
        assert_eq!(s.density, "comfortable");
        assert!(s.search_history.is_empty());
        assert!(s.updated_at.is_none());
    }

    #[test]
    fn test_record_search_dedup_and_cap() {
        let mut store = SettingsStore::new(Box::new(MemoryBackend::default()), 3);
        store.record_search("AAPL");
        store.record_search("MSFT");
        store.record_search("aapl");
        assert_eq!(store.settings().search_history, vec!["aapl", "MSFT"]);

        store.record_search("NVDA");
        store.record_search("AMZN");
        assert_eq!(store.settings().search_history.len(), 3);
        assert_eq!(store.settings().search_history[0], "AMZN");

        store.record_search("   ");
        assert_eq!(store.settings().search_history.len(), 3);
    }

    #[test]
    fn test_memory_backend_roundtrip() {
        let mut store = SettingsStore::new(Box::new(MemoryBackend::default()), 5);
        store.set_theme("light");
        store.record_search("TSLA");
        store.save().unwrap();
        assert!(store.settings().updated_at.is_some());
    }
}
