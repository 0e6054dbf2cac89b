//! End-to-end tests for `nohboard-gen generate` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

mod fixtures;

use fixtures::*;
use std::fs;

#[test]
fn test_generate_to_stdout() {
    let (input, input_temp) = write_definition(DEMO_DEFINITION);

    let output = run_cli(&["generate", input.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should generate successfully. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let document = stdout_json(&output);
    assert_eq!(document["Version"], 2);
    assert_eq!(document["Width"], 154);
    assert_eq!(document["Height"], 102);
    assert_eq!(document["Elements"].as_array().unwrap().len(), 6);
    assert_eq!(document["Elements"][0]["__type"], "KeyboardKey");
    assert_eq!(document["Elements"][2]["KeyCodes"], serde_json::json!([9, 164]));
    assert_eq!(
        top_left_corners(&document),
        vec![(5, 5), (67, 5), (109, 5), (5, 57), (5, 57), (47, 57)]
    );

    // Pretty-printed by default
    assert!(String::from_utf8_lossy(&output.stdout).contains("\n  \"Elements\": ["));
}

#[test]
fn test_generate_compact() {
    let (input, input_temp) = write_definition(DEMO_DEFINITION);

    let output = run_cli(&["generate", input.to_str().unwrap(), "--compact"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end().lines().count(), 1);
    assert!(stdout.starts_with(r#"{"Elements":[{"__type":"KeyboardKey","Id":1,"#));
}

#[test]
fn test_generate_to_file() {
    let (input, input_temp) = write_definition(DEMO_DEFINITION);
    let output_path = input_temp.path().join("out").join("demo.json");

    let output = run_cli(&[
        "generate",
        input.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Generated 6 elements (154x102 px)"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written["Elements"][5]["Text"], "Ü");
    assert_eq!(written["Elements"][5]["ShiftText"], "Ü");
}

#[test]
fn test_generate_uses_configured_output_directory() {
    let (input, input_temp) = write_definition(DEMO_DEFINITION);
    let out_dir = input_temp.path().join("overlays");
    let (config, config_temp) = write_file(
        "config.toml",
        &format!(
            "[output]\npretty = false\ndirectory = '{}'\n",
            out_dir.display()
        ),
    );

    let output = run_cli(&[
        "generate",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written = fs::read_to_string(out_dir.join("board.json")).unwrap();
    assert_eq!(written.lines().count(), 1, "pretty = false should write compact JSON");
}

#[test]
fn test_generate_uses_configured_default_region() {
    let (input, input_temp) = write_definition("Keys:\nÖ ö\n");
    let (config, config_temp) = write_file("config.toml", "[defaults]\nkeyboard = \"de\"\n");

    let output = run_cli(&[
        "generate",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let document = stdout_json(&output);
    assert_eq!(document["Elements"][0]["KeyCodes"], serde_json::json!([192]));
}

#[test]
fn test_generate_with_broken_config_falls_back_to_defaults() {
    let (input, input_temp) = write_definition("Keys:\nA A\n");
    let (config, config_temp) = write_file("config.toml", "[output\npretty = maybe");

    let output = run_cli(&[
        "generate",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config, using defaults"));
    assert_eq!(stdout_json(&output)["Elements"][0]["KeyCodes"], serde_json::json!([65]));
}

#[test]
fn test_generate_invalid_definition() {
    let (input, input_temp) = write_definition("Keys:\nBoom Hyper\n");

    let output = run_cli(&["generate", input.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(1),
        "Invalid definition should exit with code 1"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown key 'Hyper' (key 'Boom' on line 2)"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_nonexistent_file() {
    let output = run_cli(&["generate", "/nonexistent/board.txt"]);

    assert_eq!(
        output.status.code(),
        Some(2),
        "Nonexistent file should exit with code 2"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read definition file"));
}
