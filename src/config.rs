//! Game configuration
//!
//! Settings are read from JSON, looked up in this order:
//! 1. `./gage.json`
//! 2. `<platform config dir>/gage/config.json`
//!
//! Missing fields fall back to defaults, and a missing file means all
//! defaults. A file that exists but cannot be read or parsed is reported and
//! skipped.

use crate::world::screen::DEFAULT_TICK_REFRESH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = "gage.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,

    /// Logical screen width in game pixels
    pub screen_width: u32,

    /// Logical screen height in game pixels
    pub screen_height: u32,

    /// Window scale factor; 0 picks the largest that fits the monitor
    pub window_scale: u32,

    pub target_fps: u32,

    /// Ticks between frame-counter refreshes
    pub tick_refresh: i64,

    /// Directory bitmap paths are resolved against
    pub asset_root: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Gage".to_string(),
            screen_width: 640,
            screen_height: 360,
            window_scale: 0,
            target_fps: 60,
            tick_refresh: DEFAULT_TICK_REFRESH,
            asset_root: PathBuf::from("assets"),
        }
    }
}

/// Errors that can occur while reading a config file
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::ParseError(error)
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Candidate config files, highest priority first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("gage").join("config.json"));
        }
        paths
    }

    /// Load the first readable config file, or defaults if there is none
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Ignoring config {}: {}", path.display(), e),
            }
        }

        log::info!("No config file found, using defaults");
        GameConfig::default()
    }
}
