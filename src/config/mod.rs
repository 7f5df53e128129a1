//! This module handles the crate's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! All fields are optional: absent or invalid values fall back to the
//! defaults in [`defaults`], and out-of-range values are clamped when
//! resolved through the typed accessors.
//!
//! # Examples
//!
//! ```no_run
//! use toastq::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.remove_delay_ms = Some(2_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

pub use defaults::{
    DEFAULT_JOURNAL_CAPACITY, DEFAULT_REMOVE_DELAY_MS, DEFAULT_TICK_INTERVAL_MS,
    MAX_JOURNAL_CAPACITY, MAX_REMOVE_DELAY_MS, MAX_TICK_INTERVAL_MS, MAX_VISIBLE_TOASTS,
    MIN_JOURNAL_CAPACITY, MIN_REMOVE_DELAY_MS, MIN_TICK_INTERVAL_MS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "toastq";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remove_delay_ms: Option<u64>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    #[serde(default)]
    pub journal_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remove_delay_ms: Some(DEFAULT_REMOVE_DELAY_MS),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            journal_capacity: Some(DEFAULT_JOURNAL_CAPACITY),
        }
    }
}

impl Config {
    /// Resolved delay between dismissal and purge, clamped to the valid range.
    #[must_use]
    pub fn remove_delay(&self) -> Duration {
        let ms = self
            .remove_delay_ms
            .unwrap_or(DEFAULT_REMOVE_DELAY_MS)
            .clamp(MIN_REMOVE_DELAY_MS, MAX_REMOVE_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Resolved maintenance tick interval, clamped to the valid range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Resolved journal ring buffer capacity, clamped to the valid range.
    #[must_use]
    pub fn journal_capacity(&self) -> usize {
        self.journal_capacity
            .unwrap_or(DEFAULT_JOURNAL_CAPACITY)
            .clamp(MIN_JOURNAL_CAPACITY, MAX_JOURNAL_CAPACITY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
