//! Configuration management for the tempo application.
//!
//! Settings live in a JSON file in the platform data directory. Every
//! field is optional: a missing file (the common case) yields defaults,
//! so `init` is a convenience rather than a requirement. Path resolution
//! and directory creation happen here and in [`DataStorage`]; the core
//! tracker only ever sees an opened store.

use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for the watch loop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Seconds between rollover checks while watching.
    ///
    /// One minute keeps the worst-case midnight attribution error small
    /// without waking the process constantly.
    pub poll_interval: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig { poll_interval: 60 }
    }
}

/// Application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    /// Override for the database file location. Defaults to
    /// `tempo.db` in the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path).map_err(|e| AppError::Config(format!("failed to read {}: {}", config_path.display(), e)))?;
        serde_json::from_str(&contents).map_err(|e| AppError::Config(format!("failed to parse {}: {}", config_path.display(), e)))
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&config_path)?;
        serde_json::to_writer_pretty(file, self).map_err(|e| AppError::Config(format!("failed to write {}: {}", config_path.display(), e)))?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(&config_path)?;
        }
        Ok(())
    }

    /// Resolved database file path: the configured override, or the
    /// default file in the platform data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Tracker settings with defaults applied.
    pub fn tracker(&self) -> TrackerConfig {
        self.tracker.clone().unwrap_or_default()
    }
}
