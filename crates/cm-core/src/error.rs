//! Error types for cellmouse

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the cellmouse crates
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the configuration layer.
///
/// The input core itself never fails; everything it cannot handle is dropped
/// by policy. Only reading configuration from disk can go wrong.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the configuration file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`]
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration parsed but holds values the peripheral cannot use
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
