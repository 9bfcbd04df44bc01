//! Configuration for the cellmouse peripheral
//!
//! Configuration is read-only: it is loaded from `config.toml` in the user
//! configuration directory when present and never written back.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Diagnostics settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub log_level: LogLevel,
    pub log_to_file: bool,
    pub log_path: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_to_file: false,
            log_path: PathBuf::from("cellmouse.log"),
        }
    }
}

/// Mouse peripheral settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum spacing between committed motion samples, in milliseconds
    pub sample_interval_ms: u64,
    /// Whether the system, rather than the application, owns mouse data
    pub intercepted: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 10,
            intercepted: false,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub debug: DebugConfig,
    pub input: InputConfig,
}

impl Config {
    /// Location of the configuration file, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cellmouse").join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Self::path().as_deref())
    }

    /// Load `path` if it names an existing file, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.sample_interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "input.sample_interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
