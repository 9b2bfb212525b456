//! CLI integration tests
//!
//! These tests run the layoutbind binary against the fixture project.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// layoutbind with `--project` pointing at the fixtures
fn layoutbind() -> Command {
    let mut cmd = Command::cargo_bin("layoutbind").unwrap();
    cmd.arg("--project").arg(fixtures_path());
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    Command::cargo_bin("layoutbind")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bind"))
        .stdout(predicate::str::contains("bean"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("layoutbind")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("layoutbind"));
}

// ============================================================================
// bind
// ============================================================================

#[test]
fn test_bind_default_butterknife() {
    layoutbind()
        .args(["bind", "activity_main"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "@BindView(R.id.header_icon)\nImageView mHeaderIcon;",
        ))
        .stdout(predicate::str::contains(
            "@BindView(R.id.submit_button)\nAppCompatButton mSubmitButton;",
        ))
        .stdout(predicate::str::contains("landscape_only").not());
}

#[test]
fn test_bind_find_view_camel_with_clicks() {
    layoutbind()
        .args([
            "bind",
            "activity_main",
            "--style",
            "find-view",
            "--naming",
            "camel",
            "--click",
            "--access",
            "private",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("private EditText userName;"))
        .stdout(predicate::str::contains(
            "    submitButton.setOnClickListener(this::submitButtonClick);",
        ))
        .stdout(predicate::str::contains("private void submitButtonClick(View view) {"));
}

#[test]
fn test_bind_from_source_line() {
    layoutbind()
        .args([
            "bind",
            "--line",
            "        setContentView(R.layout.activity_main);",
            "--naming",
            "snake",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("EditText user_name;"));
}

#[test]
fn test_bind_layout_file_path() {
    let path = fixtures_path().join("app/src/main/res/layout/view_header.xml");

    layoutbind()
        .arg("bind")
        .arg(path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"layout\": \"view_header\""))
        .stdout(predicate::str::contains("\"total\": 2"))
        .stdout(predicate::str::contains("\"field_name\": \"mTitle\""));
}

#[test]
fn test_bind_json_marks_included_views() {
    let output = layoutbind()
        .args(["bind", "activity_main", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["elements"][0]["included_from"], "view_header");
    assert!(json["elements"][2].get("included_from").is_none());
}

#[test]
fn test_bind_unknown_layout_fails() {
    layoutbind()
        .args(["bind", "no_such_layout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_layout"));
}

#[test]
fn test_bind_cycle_fails() {
    layoutbind()
        .args(["bind", "cycle_a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("include cycle"));
}

#[test]
fn test_bind_bad_id_strict_and_lenient() {
    layoutbind()
        .args(["bind", "bad_id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title_without_prefix"));

    layoutbind()
        .args(["bind", "bad_id", "--lenient"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Button mOk;"));
}

#[test]
fn test_bind_without_layout_fails() {
    layoutbind().arg("bind").assert().failure();
}

#[test]
fn test_bind_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("Views.java");

    layoutbind()
        .args(["bind", "activity_main", "--output"])
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read_to_string(out).unwrap();
    assert!(written.contains("@BindView(R.id.user_name)"));
}

#[test]
fn test_bind_empty_layout_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("Empty.java");

    layoutbind()
        .args(["bind", "empty_screen", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("No views").not())
        .stderr(predicate::str::contains("No views with an id in empty_screen"));

    assert_eq!(std::fs::read_to_string(out).unwrap(), "");
}

#[test]
fn test_bind_logs_info_to_stderr() {
    layoutbind()
        .args(["bind", "activity_main"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Indexed"))
        .stdout(predicate::str::contains("Indexed").not());

    layoutbind()
        .args(["--quiet", "bind", "activity_main"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Indexed").not());
}

#[test]
fn test_bind_config_file_sets_convention() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[naming]\nconvention = \"camel\"\n").unwrap();

    layoutbind()
        .args(["bind", "activity_main", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("EditText userName;"));
}

// ============================================================================
// bean
// ============================================================================

#[test]
fn test_bean_from_file() {
    layoutbind()
        .args(["bean", "User", "--package", "com.example.model", "--fields"])
        .arg(fixtures_path().join("fields/user.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("package com.example.model;"))
        .stdout(predicate::str::contains(
            "public class User implements Serializable {",
        ))
        .stdout(predicate::str::contains("    public Integer getId() {"))
        .stdout(predicate::str::contains("    public void setAge(int age) {"));
}

#[test]
fn test_bean_from_stdin() {
    layoutbind()
        .args(["bean", "Point", "--no-interfaces", "--access", "private"])
        .write_stdin("x int\ny int\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("public class Point {"))
        .stdout(predicate::str::contains("    private int x;"));
}

#[test]
fn test_bean_malformed_fields() {
    layoutbind()
        .args(["bean", "Broken"])
        .write_stdin("name String\nage\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
