//! Tests for `src/logging.rs`.

use battery_indicator::logging::LoggingGuard;

#[test]
fn logging_guard_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<LoggingGuard>();
}

#[test]
fn init_production_creates_logs_dir() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let logs_dir = tmp.path().join("logs");
    assert!(!logs_dir.exists());

    // Only one global subscriber can be installed per process, so the result
    // is not asserted; the directory is created before installation.
    let _result = battery_indicator::logging::init_production(&logs_dir, "test.log");
    assert!(logs_dir.exists(), "logs directory should be created");
}

#[test]
fn init_cli_tolerates_existing_subscriber() {
    battery_indicator::logging::init_cli("warn");
    battery_indicator::logging::init_cli("debug");
}
