//! End-to-end tests for `sitewright palette`.

use std::process::Command;

/// Path to the sitewright binary
fn sitewright_bin() -> &'static str {
    env!("CARGO_BIN_EXE_sitewright")
}

#[test]
fn test_palette_text_output_lists_roles() {
    let output = Command::new(sitewright_bin())
        .args(["palette", "--industry", "tech"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Palette for tech (modern):"));
    for role in ["primary", "secondary", "accent", "neutral", "success", "error"] {
        assert!(stdout.contains(role), "missing role {role}");
    }
}

#[test]
fn test_palette_json_output_parses() {
    let output = Command::new(sitewright_bin())
        .args(["palette", "--industry", "finance", "--style", "bold", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let palette: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    for role in ["primary", "secondary", "accent", "neutral"] {
        let hex = palette[role].as_str().unwrap();
        assert!(hex.starts_with('#') && hex.len() == 7, "bad hex for {role}: {hex}");
    }
    assert!(palette["semantic"]["warning"].is_string());
}

#[test]
fn test_palette_is_deterministic() {
    let run = || {
        Command::new(sitewright_bin())
            .args(["palette", "--industry", "healthcare", "--json"])
            .output()
            .expect("Failed to execute command")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_palette_base_color_changes_result() {
    let run = |extra: &[&str]| {
        let output = Command::new(sitewright_bin())
            .args(["palette", "--industry", "tech", "--json"])
            .args(extra)
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
        let value: serde_json::Value =
            serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
        value["primary"].as_str().unwrap().to_string()
    };

    let default_primary = run(&[]);
    let seeded_primary = run(&["--base-color", "#e11d48"]);
    assert_ne!(default_primary, seeded_primary);
}

#[test]
fn test_palette_invalid_base_color_falls_back() {
    let output = Command::new(sitewright_bin())
        .args(["palette", "--industry", "tech", "--base-color", "bogus", "--json"])
        .output()
        .expect("Failed to execute command");

    // the industry table entry stands in for an unparseable base color
    assert_eq!(output.status.code(), Some(0));
    let default_run = Command::new(sitewright_bin())
        .args(["palette", "--industry", "tech", "--json"])
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.stdout, default_run.stdout);
}
