//! Headless replay and config file loading.

use std::io::Write;

use rewind_tui::{TuiConfig, replay};

#[test]
fn test_replay_winning_game() {
    let out = replay(&[0, 1, 3, 4, 6, 2], None, false).expect("replay succeeds");
    let expected = [
        " X | O |   ",
        "---+---+---",
        " X | O |   ",
        "---+---+---",
        " X |   |   ",
        "",
        "Winner: X",
        "  Go to game start",
        "  Go to move #1",
        "  Go to move #2",
        "  Go to move #3",
        "  Go to move #4",
        "> Go to move #5",
        "",
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn test_replay_with_jump() {
    let out = replay(&[0, 1, 3, 4, 6], Some(2), false).unwrap();
    assert!(out.contains("Next player: X"));
    assert!(out.contains("> Go to move #2"));
    assert!(out.contains("  Go to move #5"));
}

#[test]
fn test_replay_rejects_out_of_range_jump() {
    let err = replay(&[4], Some(5), false).unwrap_err();
    assert!(err.to_string().contains("Cannot jump to step 5"));
}

#[test]
fn test_replay_json() {
    let out = replay(&[4, 0], None, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status"], "Next player: X");
    assert_eq!(value["step_number"], 2);
    assert_eq!(value["moves"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_config_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[logging]\nfile = \"/tmp/rewind-test.log\"\nfilter = \"debug\"\n\n[display]\nshow_cell_numbers = false"
    )
    .unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.logging().filter(), "debug");
    assert!(!*config.display().show_cell_numbers());
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_unreadable_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
