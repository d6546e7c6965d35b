use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

const APP_DIR: &str = "sync-lyrics";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub playback: PlaybackConfig,
}

/// Subtitle retrieval settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Overall request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: format!("sync-lyrics/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Player clock and navigation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Interval between playback-time updates in milliseconds
    pub tick_ms: u64,
    /// Seconds skipped per seek key press
    pub seek_step_secs: f64,
    /// Silence appended after the last cue when sizing the timeline
    pub tail_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            seek_step_secs: 5.0,
            tail_secs: 3.0,
        }
    }
}

impl PlaybackConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

impl Config {
    /// `<config_dir>/sync-lyrics/config.toml`, or `./config.toml` without a config dir.
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(config_dir) => config_dir.join(APP_DIR).join(CONFIG_FILE),
            None => PathBuf::from(CONFIG_FILE),
        }
    }

    /// Load from an explicit path, or from the default path if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path();
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "No config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write this config to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let content = format!(
            "# sync-lyrics configuration\n\n{}",
            self.to_toml()?
        );
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
