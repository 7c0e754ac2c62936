//! Integration tests for basic stdin->stdout piping.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn retype() -> Command {
    let mut cmd = Command::cargo_bin("retype").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/retype-test-no-config");
    cmd
}

#[test]
fn empty_stdin_exits_zero() {
    retype().write_stdin("").assert().success().stdout("");
}

#[test]
fn raw_line_becomes_message_field() {
    retype()
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"message":"hello world"}]"#));
}

#[test]
fn custom_field_name() {
    retype()
        .arg("--field-name=line")
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"line":"hello"}"#));
}

#[test]
fn empty_lines_are_skipped() {
    let output = retype().write_stdin("a\n\n   \nb\n").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn json_object_line_keeps_fields_sorted() {
    let input = r#"{"zebra":"z","alpha":1,"nested":{"k":"v"}}"#;
    let output = retype()
        .arg("--format=json")
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(r#"{"alpha":1,"nested":{"k":"v"},"zebra":"z"}"#),
        "unexpected output: {stdout}"
    );
}

#[test]
fn forward_pair_keeps_timestamp() {
    retype()
        .arg("--format=json")
        .write_stdin("[1700000000,{\"a\":\"x\"}]\n")
        .assert()
        .success()
        .stdout("[1700000000,{\"a\":\"x\"}]\n");
}

#[test]
fn non_json_line_in_json_mode_passes_as_message() {
    retype()
        .arg("--format=json")
        .write_stdin("plain text\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"message":"plain text"}"#));
}

#[test]
fn record_count_preserved() {
    let input = "[1,{\"n\":\"1\"}]\nbroken {\n[3,{\"n\":\"3\"}]\n";
    let output = retype()
        .args(["--format=json", "--convert=n:integer"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], r#"[1,{"n":1}]"#);
    assert!(lines[1].contains(r#""message":"broken {""#));
    assert_eq!(lines[2], r#"[3,{"n":3}]"#);
}

#[cfg(unix)]
#[test]
#[allow(deprecated)]
fn unreadable_stdin_exits_two() {
    use assert_cmd::assert::OutputAssertExt;
    use assert_cmd::cargo::CommandCargoExt;

    // reading a directory fails with EISDIR
    let dir = tempfile::tempdir().unwrap();
    let stdin = std::fs::File::open(dir.path()).unwrap();

    std::process::Command::cargo_bin("retype")
        .unwrap()
        .env("XDG_CONFIG_HOME", "/tmp/retype-test-no-config")
        .stdin(stdin)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("retype: I/O error"));
}
