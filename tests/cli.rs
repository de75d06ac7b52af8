//! Integration tests for the `transcript` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("general.json")
}

/// The binary, isolated from any real configuration.
fn transcript(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("transcript").unwrap();
    cmd.current_dir(home)
        .env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_render_fragment_to_stdout() {
    let temp = tempdir().unwrap();

    transcript(temp.path())
        .arg("render")
        .arg(fixture())
        .arg("--fragment")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome everyone"))
        .stdout(predicate::str::contains("Original message was deleted."))
        .stdout(predicate::str::contains("<!DOCTYPE html>").not());
}

#[test]
fn test_render_document_to_file() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out").join("general.html");

    transcript(temp.path())
        .arg("render")
        .arg(fixture())
        .arg("-o")
        .arg(&out)
        .arg("--tz")
        .arg("Asia/Tokyo")
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 6 messages"));

    let page = fs::read_to_string(&out).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Transcript - #general</title>"));
    assert!(page.contains("Asia/Tokyo"));
    assert!(page.contains("<aside class=\"meta\">"));
}

#[test]
fn test_directory_config_overrides_defaults() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join(".chat-transcript.toml"),
        "[document]\ntitle_prefix = \"Log\"\ninclude_roster = false\n",
    )
    .unwrap();

    transcript(temp.path())
        .arg("render")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Log - #general</title>"))
        .stdout(predicate::str::contains("<aside class=\"meta\">").not());
}

#[test]
fn test_unknown_timezone_is_a_config_error() {
    let temp = tempdir().unwrap();

    transcript(temp.path())
        .arg("render")
        .arg(fixture())
        .arg("--tz")
        .arg("Mars/Olympus")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unknown timezone"));
}

#[test]
fn test_missing_archive() {
    let temp = tempdir().unwrap();

    transcript(temp.path())
        .arg("render")
        .arg(temp.path().join("nope.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_roster_counts_messages_per_author() {
    let temp = tempdir().unwrap();

    let output = transcript(temp.path())
        .arg("roster")
        .arg(fixture())
        .output()
        .unwrap();
    assert!(output.status.success());

    let roster: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(roster["10"]["message_count"], 3);
    assert_eq!(roster["20"]["message_count"], 3);
    assert_eq!(roster["10"]["tag"], "amy");
}

#[test]
fn test_roster_respects_limit() {
    let temp = tempdir().unwrap();

    let output = transcript(temp.path())
        .args(["roster", "--limit", "2"])
        .arg(fixture())
        .output()
        .unwrap();
    assert!(output.status.success());

    let roster: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let authors = roster.as_object().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(roster["20"]["message_count"], 2);
}

#[test]
fn test_config_init_set_get() {
    let temp = tempdir().unwrap();
    let config = temp.path().join("config.toml");

    transcript(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(config.exists());

    transcript(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "render.timezone", "Europe/Paris"])
        .assert()
        .success();

    transcript(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "render.timezone"])
        .assert()
        .success()
        .stdout("Europe/Paris\n");

    transcript(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "render.timezone", "Nowhere/Land"])
        .assert()
        .failure();
}
