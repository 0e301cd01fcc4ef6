//! End-to-end tests for `sitewright fonts`.

use std::process::Command;

/// Path to the sitewright binary
fn sitewright_bin() -> &'static str {
    env!("CARGO_BIN_EXE_sitewright")
}

#[test]
fn test_fonts_text_output() {
    let output = Command::new(sitewright_bin())
        .args(["fonts", "--industry", "tech", "--style", "technical"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pairing: Tech Startup"));
    assert!(stdout.contains("base"));
    // the Major Third sm step is 0.800rem, under the 14px floor
    assert!(stdout.contains("⚠ Small text is below 14px"));
    assert!(stdout.contains("hint: Increase small text size"));
}

#[test]
fn test_fonts_json_output() {
    let output = Command::new(sitewright_bin())
        .args(["fonts", "--industry", "finance", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert!(report["google_fonts_url"]
        .as_str()
        .unwrap()
        .starts_with("https://fonts.googleapis.com/css2?family="));
    assert_eq!(report["system"]["scale"]["base"], "1.000rem");
    // advisory only: the Major Third sm step sits under the 14px floor
    assert_eq!(report["accessible"], false);
    let issues = report["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].as_str().unwrap().contains("Small text"));
}

#[test]
fn test_fonts_default_style_is_professional() {
    let explicit = Command::new(sitewright_bin())
        .args(["fonts", "--industry", "tech", "--style", "professional", "--json"])
        .output()
        .expect("Failed to execute command");
    let defaulted = Command::new(sitewright_bin())
        .args(["fonts", "--industry", "tech", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(explicit.stdout, defaulted.stdout);
}
