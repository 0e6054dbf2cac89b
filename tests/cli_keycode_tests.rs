//! End-to-end tests for `nohboard-gen keycode` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

mod fixtures;

use fixtures::*;

#[test]
fn test_keycode_shared_key() {
    let output = run_cli(&["keycode", "Space"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Key:    Space"));
    assert!(stdout.contains("Region: none"));
    assert!(stdout.contains("Code:   32 (0x20)"));
}

#[test]
fn test_keycode_region_json() {
    let output = run_cli(&["keycode", "ü", "--keyboard", "de", "--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result = stdout_json(&output);
    assert_eq!(result["name"], "ü");
    assert_eq!(result["region"], "de");
    assert_eq!(result["code"], 186);
    assert_eq!(result["valid"], true);
}

#[test]
fn test_keycode_is_case_insensitive() {
    let output = run_cli(&["keycode", "leftctrl", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["code"], 162);
}

#[test]
fn test_keycode_region_key_without_region() {
    let output = run_cli(&["keycode", "ü", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let result = stdout_json(&output);
    assert_eq!(result["valid"], false);
    assert!(result.get("code").is_none());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown key 'ü'"));
}

#[test]
fn test_keycode_unsupported_region() {
    let output = run_cli(&["keycode", "A", "--keyboard", "cy"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "Keyboard region 'cy' is not supported. Available regions: de-ch, de, en-gb, en-us, fr, nl"
    ));
}

#[test]
fn test_keycode_uses_configured_region() {
    let (config, config_temp) = write_file("config.toml", "[defaults]\nkeyboard = \"en-gb\"\n");

    let output = run_cli(&[
        "keycode",
        "#",
        "--config",
        config.to_str().unwrap(),
        "--json",
    ]);

    assert_eq!(output.status.code(), Some(0));
    let result = stdout_json(&output);
    assert_eq!(result["region"], "en-gb");
    assert_eq!(result["code"], 222);
}
