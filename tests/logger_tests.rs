//! Logger bootstrap
//!
//! One test only: the global subscriber can be installed once per
//! process.

use cakestore_server::utils::logger::init_logger_with_file;

#[test]
fn file_logging_creates_a_missing_directory() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let dir = tmp.path().join("logs");
    assert!(!dir.exists());

    init_logger_with_file(Some("info"), dir.to_str());
    tracing::info!("logger smoke");

    // Fresh deployments have no log directory yet; init creates it and
    // the daily appender starts writing into it.
    assert!(dir.is_dir());
    let entries: Vec<_> = std::fs::read_dir(&dir).expect("read log dir").collect();
    assert!(!entries.is_empty());
}
