//! Logging infrastructure for cellmouse
//!
//! Everything the peripheral logs goes to the [`INPUT_TARGET`] target through
//! the `input_*` macros. Hosts embedding the crate may install their own
//! subscriber instead of calling [`init`].

use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, LogLevel};
use crate::error::{Error, Result};

/// Log target shared by every input component
pub const INPUT_TARGET: &str = "input";

/// Maximum level for a configured verbosity, `None` when logging is off.
pub fn max_level(level: LogLevel) -> Option<Level> {
    match level {
        LogLevel::Off => None,
        LogLevel::Error => Some(Level::ERROR),
        LogLevel::Warn => Some(Level::WARN),
        LogLevel::Info => Some(Level::INFO),
        LogLevel::Debug => Some(Level::DEBUG),
        LogLevel::Trace => Some(Level::TRACE),
    }
}

/// Install the global subscriber described by `config.debug`.
///
/// Returns `Ok(false)` if logging is off or another subscriber was already
/// installed. Failing to create the log file is an error.
pub fn init(config: &Config) -> Result<bool> {
    let Some(level) = max_level(config.debug.log_level) else {
        return Ok(false);
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());
    let console = fmt::layer().with_target(true).with_thread_ids(true);

    let file_layer = if config.debug.log_to_file {
        let path = &config.debug.log_path;
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Some(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
    } else {
        None
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(
            target: INPUT_TARGET,
            level = ?config.debug.log_level,
            to_file = config.debug.log_to_file,
            "Logging initialized"
        );
    }
    Ok(installed)
}

/// Log an input trace message
#[macro_export]
macro_rules! input_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::INPUT_TARGET, $($arg)*)
    };
}

/// Log an input debug message
#[macro_export]
macro_rules! input_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::INPUT_TARGET, $($arg)*)
    };
}

/// Log an input warning
#[macro_export]
macro_rules! input_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::INPUT_TARGET, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        assert_eq!(max_level(LogLevel::Off), None);
        assert_eq!(max_level(LogLevel::Warn), Some(Level::WARN));
        assert_eq!(max_level(LogLevel::Trace), Some(Level::TRACE));
    }

    #[test]
    fn test_off_installs_nothing() {
        let mut config = Config::default();
        config.debug.log_level = LogLevel::Off;
        config.debug.log_to_file = true;
        config.debug.log_path = "/nonexistent/cellmouse/never.log".into();

        // Off short-circuits before the file is touched.
        assert!(!init(&config).unwrap());
    }
}
