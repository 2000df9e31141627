//! Front-end configuration loaded from an optional TOML file.
//!
//! Only rendering and logging are configurable. The color rotation, the
//! initial state and the tap animation are fixed.
//!
//! ```toml
//! [log]
//! filter = "huecycle=debug"
//! file = "huecycle.log"
//!
//! [display]
//! frame_rate = 60
//! shape_height = 9
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "HUECYCLE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "huecycle.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
    /// Log destination. Logging is off when unset, the terminal belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Redraw rate while a color transition is in flight.
    pub frame_rate: u32,
    /// Height of the shape in terminal rows.
    pub shape_height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            shape_height: 9,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub log: LogConfig,
    pub display: DisplayConfig,
}

impl DemoConfig {
    /// Config path from `HUECYCLE_CONFIG`, else `huecycle.toml` in the
    /// working directory.
    pub fn locate() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Like `load_from_file`, but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load_from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter must not be empty".into()));
        }
        if !(1..=240).contains(&self.display.frame_rate) {
            return Err(ConfigError::Invalid(format!(
                "display.frame_rate must be between 1 and 240, got {}",
                self.display.frame_rate
            )));
        }
        if !(3..=64).contains(&self.display.shape_height) {
            return Err(ConfigError::Invalid(format!(
                "display.shape_height must be between 3 and 64, got {}",
                self.display.shape_height
            )));
        }
        Ok(())
    }

    /// Delay between redraws while animating.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.display.frame_rate.max(1)
    }
}
