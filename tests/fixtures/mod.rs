//! Shared test fixtures for generation and CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A definition exercising regions, variables, margins, chords and alternatives.
///
/// Expected layout (spacing 2, base 40x40):
/// - row 1: `Esc` at x 5, `F1` shifted by half a key to x 67, chord `Alt+Tab` at x 109
/// - row 2: 10px lower than usual at y 57, `Shift` (two alternatives) and a half-width `Ü`
pub const DEMO_DEFINITION: &str = r#"# Demo keyboard
[keyboard=de-ch]
[width=40, height=40]
[spacing=2]
$half = [width=0.5k]
$esc = "Esc"

Keys:
$esc Esc
"F1" F1 [marginLeft=0.5k]
"Alt+Tab" LeftAlt & Tab  # chord

[marginTop=10px]
Shift LeftShift RightShift
Ü ü $half
"#;

/// Writes `content` to `board.txt` in a fresh temp directory.
///
/// The directory must be kept alive for as long as the file is used.
pub fn write_definition(content: &str) -> (PathBuf, TempDir) {
    write_file("board.txt", content)
}

/// Writes `content` to `name` in a fresh temp directory.
pub fn write_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    (path, temp_dir)
}

/// Path to the nohboard-gen binary
pub fn nohboard_gen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_nohboard-gen")
}

/// Runs the binary with `args`, isolated from any user config.
pub fn run_cli(args: &[&str]) -> Output {
    let config_home = TempDir::new().expect("Failed to create temp dir");
    Command::new(nohboard_gen_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON")
}

/// Collects `(x, y)` of the top-left corner of each element.
pub fn top_left_corners(document: &serde_json::Value) -> Vec<(i64, i64)> {
    document["Elements"]
        .as_array()
        .expect("Elements should be an array")
        .iter()
        .map(|element| {
            let corner = &element["Boundaries"][0];
            (
                corner["X"].as_i64().expect("X"),
                corner["Y"].as_i64().expect("Y"),
            )
        })
        .collect()
}
