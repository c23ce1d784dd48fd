use sahayatri_core::{default_log_level, init_logging, logging_status};
use tempfile::tempdir;

// Single test: logging state is process-global, so all assertions share
// one initialization.
#[test]
fn init_is_idempotent_and_rejects_reconfiguration() {
    let dir = tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap().to_string();

    assert!(logging_status().is_none());
    init_logging("info", &dir_str).unwrap();
    init_logging("info", &dir_str).unwrap();

    let level_err = init_logging("debug", &dir_str).unwrap_err();
    assert!(level_err.contains("refusing to switch"));

    let other = tempdir().unwrap();
    let dir_err = init_logging("info", other.path().to_str().unwrap()).unwrap_err();
    assert!(dir_err.contains("refusing to switch"));

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, dir.path());

    assert!(matches!(default_log_level(), "debug" | "info"));
}
