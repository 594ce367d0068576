//! End-to-end CLI integration tests.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio(prefs_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env("FOLIO_PREFS", prefs_dir.join("prefs.json"))
        .env_remove("FOLIO_CONTENT")
        .env_remove("FOLIO_SIMULATE");
    cmd
}

#[test]
fn help_flag() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("carousel"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn simulation_prints_auto_advances() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "18s", "--step", "500ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[00:06.000] slide"))
        .stdout(predicate::str::contains("[00:12.000] slide"))
        .stdout(predicate::str::contains("[00:18.000] slide"))
        .stdout(predicate::str::contains("page stopped"))
        .stdout(predicate::str::contains("Summary"));
}

#[test]
fn quiet_prints_only_summary() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "1s", "-q", "--phrases", "Hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Typing"))
        .stdout(predicate::str::contains("\"Hello\""))
        .stdout(predicate::str::contains("page started").not());
}

#[test]
fn verbose_prints_typing_frames() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "200ms", "-v", "--phrases", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Ru\""));
}

#[test]
fn dark_flag_persists_preference() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "0", "--dark", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark"));
    let saved = std::fs::read_to_string(tmp.path().join("prefs.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["dark_mode"], true);

    // Picked up on the next run without the flag.
    folio(tmp.path())
        .args(["--simulate", "0", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark"));
}

#[test]
fn reset_prefs_deletes_saved_theme() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "0", "--dark", "-q"])
        .assert()
        .success();
    assert!(tmp.path().join("prefs.json").exists());

    folio(tmp.path())
        .arg("--reset-prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed theme preference"));
    assert!(!tmp.path().join("prefs.json").exists());

    folio(tmp.path())
        .args(["--simulate", "0", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Light"));
}

#[test]
fn no_persist_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "0", "--dark", "--no-persist", "-q"])
        .assert()
        .success();
    assert!(!tmp.path().join("prefs.json").exists());
}

#[test]
fn content_file_replaces_page() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");
    std::fs::write(
        &path,
        r#"{
            "owner": "Ada",
            "phrases": ["Engineer"],
            "sections": [],
            "projects": [],
            "testimonials": [{"quote": "Great", "author": "Bob", "role": "CTO"}],
            "document_height": 2000,
            "viewport_height": 800
        }"#,
    )
    .unwrap();
    folio(tmp.path())
        .args(["--simulate", "1s", "-q", "--content"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Engineer\""));
}

#[test]
fn invalid_content_exits_with_content_code() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("site.json");
    std::fs::write(&path, "not json").unwrap();
    folio(tmp.path())
        .args(["--simulate", "1s", "--content"])
        .arg(&path)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("invalid site content"));
}

#[test]
fn zero_step_is_config_error() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "1s", "--step", "0"])
        .assert()
        .code(4);
}

#[test]
fn bad_duration_rejected() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--simulate", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn shell_completion_bash() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

#[test]
fn shell_completion_zsh() {
    let tmp = TempDir::new().unwrap();
    folio(tmp.path())
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}
