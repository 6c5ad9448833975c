//! Configuration management for Marketlens
//!
//! This module handles loading, validation, and management of the
//! application configuration from YAML files.

use crate::error::{MarketlensError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// UI settings persistence configuration
    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Path to log file (or directory for the rolling appender)
    pub file: String,

    /// Optional console-specific level override
    #[serde(default)]
    pub console_level: Option<String>,

    /// Optional file-specific level override
    #[serde(default)]
    pub file_level: Option<String>,

    /// Number of rotated log files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

/// Where and how UI settings are persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    /// Path of the settings JSON file
    pub file: String,

    /// Maximum number of search history entries kept
    pub max_search_history: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "./logs/marketlens.log".to_string(),
            console_level: None,
            file_level: None,
            backup_count: 5,
            console_output: true,
            json_format: false,
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            file: "./marketlens_settings.json".to_string(),
            max_search_history: 20,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            settings: SettingsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default locations, falling back to
    /// defaults when no file exists
    pub fn load() -> Result<Self> {
        let default_paths = [
            "marketlens.yaml",
            "/data/marketlens.yaml",
            "/etc/marketlens/config.yaml",
        ];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        Ok(Config::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::logging::parse_log_level(&self.logging.level)
            .map_err(|_| MarketlensError::validation("logging.level", "Unknown log level"))?;

        if let Some(level) = &self.logging.console_level {
            crate::logging::parse_log_level(level).map_err(|_| {
                MarketlensError::validation("logging.console_level", "Unknown log level")
            })?;
        }

        if let Some(level) = &self.logging.file_level {
            crate::logging::parse_log_level(level).map_err(|_| {
                MarketlensError::validation("logging.file_level", "Unknown log level")
            })?;
        }

        if self.settings.file.is_empty() {
            return Err(MarketlensError::validation(
                "settings.file",
                "Settings file path cannot be empty",
            ));
        }

        if self.settings.max_search_history == 0 {
            return Err(MarketlensError::validation(
                "settings.max_search_history",
                "Must be greater than 0",
            ));
        }

        Ok(())
    }
}
