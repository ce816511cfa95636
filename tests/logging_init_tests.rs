//! Tracing initialization from a fresh process
//!
//! Kept in its own test binary: the global subscriber can only be installed
//! once per process, and these checks need it to be absent at the start.

mod common;

use std::path::PathBuf;

use common::serial;
use vecforge::logging::{init_with_config, is_initialized, LoggingConfig, LoggingError};

/// A regular file standing where the log directory should be
fn blocked_log_path(tag: &str) -> (PathBuf, PathBuf) {
    let blocker = std::env::temp_dir().join(format!("vecforge-{}-{}", tag, std::process::id()));
    std::fs::write(&blocker, b"").unwrap();
    let log_file = blocker.join("run.jsonl");
    (blocker, log_file)
}

#[test]
#[serial]
fn test_failed_init_leaves_logging_uninitialized() {
    assert!(!is_initialized());

    let (blocker, log_file) = blocked_log_path("init");
    let bad = LoggingConfig::new().with_log_file(log_file);

    let err = init_with_config(&bad).unwrap_err();
    assert!(matches!(err, LoggingError::DirectoryCreationFailed(_)));
    assert!(!is_initialized());

    // A second bad attempt still reports the failure instead of Ok
    assert!(init_with_config(&bad).is_err());
    assert!(!is_initialized());

    // A corrected config goes through afterwards
    assert!(init_with_config(&LoggingConfig::new()).is_ok());
    assert!(is_initialized());

    let _ = std::fs::remove_file(&blocker);
}
