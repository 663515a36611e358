//! Tests for loading the settings file.

use noughts::Settings;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn settings_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_file() {
    let file = settings_file(
        r#"
think_delay_ms = 0
seed = 42
log_file = "game.log"
"#,
    );

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(*settings.think_delay_ms(), 0);
    assert_eq!(*settings.seed(), Some(42));
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = settings_file("seed = 7\n");

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(*settings.seed(), Some(7));
    assert_eq!(*settings.think_delay_ms(), 500);
    assert_eq!(settings.log_file(), &PathBuf::from("noughts.log"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = settings_file("think_delay_ms = \"soon\"\n");

    let err = Settings::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_cli_overrides_file() {
    let file = settings_file("seed = 7\nthink_delay_ms = 300\n");

    let settings = Settings::load(file.path())
        .unwrap()
        .with_overrides(Some(1), None);
    assert_eq!(*settings.seed(), Some(1));
    assert_eq!(*settings.think_delay_ms(), 300);
}
