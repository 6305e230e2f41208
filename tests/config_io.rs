use dialogue_debugger::{DebuggerConfig, MAX_NAME_LENGTH};
use std::io::Write;

#[test]
fn load_parses_a_full_config() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"value_refresh_seconds": 0.25, "max_name_length": 64}}"#).unwrap();
    let cfg = DebuggerConfig::load(file.path()).expect("config loads");
    assert_eq!(cfg.value_refresh_seconds, 0.25);
    assert_eq!(cfg.max_name_length, 64);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{"value_refresh_seconds": 2.0}}"#).unwrap();
    let cfg = DebuggerConfig::load(file.path()).expect("config loads");
    assert_eq!(cfg.value_refresh_seconds, 2.0);
    assert_eq!(cfg.max_name_length, MAX_NAME_LENGTH);
}

#[test]
fn load_reports_the_offending_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "not json").unwrap();
    let err = DebuggerConfig::load(file.path()).unwrap_err();
    assert!(format!("{err}").contains("Failed to parse config file"));
}

#[test]
fn load_or_default_survives_a_missing_file() {
    let cfg = DebuggerConfig::load_or_default("/nonexistent/debugger.json");
    assert_eq!(cfg.value_refresh_seconds, 1.0);
    assert_eq!(cfg.max_name_length, MAX_NAME_LENGTH);
}
