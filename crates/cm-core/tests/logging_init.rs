//! Installing the global subscriber from configuration

use cm_core::config::{Config, LogLevel};
use cm_core::logging::{self, INPUT_TARGET};
use cm_core::Error;
use tempfile::TempDir;

#[test]
fn test_init_writes_log_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut config = Config::default();
    config.debug.log_level = LogLevel::Debug;
    config.debug.log_to_file = true;

    // A log file that cannot be created is reported, not swallowed.
    config.debug.log_path = temp_dir.path().join("missing").join("cellmouse.log");
    let err = logging::init(&config).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));

    let log_path = temp_dir.path().join("cellmouse.log");
    config.debug.log_path = log_path.clone();
    assert!(logging::init(&config).unwrap());

    cm_core::input_warn!(port = 0, "Mouse report dropped");

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("Mouse report dropped"));
    assert!(contents.contains(INPUT_TARGET));

    // The first subscriber stays in place.
    assert!(!logging::init(&config).unwrap());
}
