//! Integration tests for config file loading and CLI precedence.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[allow(deprecated)]
fn retype() -> Command {
    let mut cmd = Command::cargo_bin("retype").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/retype-test-no-config");
    cmd
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_settings_applied() {
    let file = config_file(
        r#"
format = "json"
convert = "code:integer,ok:bool"
time_parse = true
time_key = "ts"
time_format = "%Y-%m-%d %H:%M:%S"
"#,
    );

    retype()
        .arg(format!("--config={}", file.path().display()))
        .write_stdin(r#"[1,{"code":"200","ok":"t","ts":"2023-01-02 03:04:05"}]"#)
        .assert()
        .success()
        .stdout("[1672628645,{\"code\":200,\"ok\":true,\"ts\":\"2023-01-02 03:04:05\"}]\n");
}

#[test]
fn cli_overrides_config_file() {
    let file = config_file(
        r#"
format = "json"
convert = "a:integer"
"#,
    );

    retype()
        .arg(format!("--config={}", file.path().display()))
        .arg("--convert=b:integer")
        .write_stdin(r#"[1,{"a":"1","b":"2"}]"#)
        .assert()
        .success()
        .stdout("[1,{\"a\":\"1\",\"b\":2}]\n");
}

#[test]
fn xdg_config_home_is_used() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("retype")).unwrap();
    std::fs::write(
        dir.path().join("retype").join("config.toml"),
        "format = \"json\"\nconvert = \"n:float\"\n",
    )
    .unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("retype").unwrap();
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .write_stdin(r#"[1,{"n":"2.5"}]"#)
        .assert()
        .success()
        .stdout("[1,{\"n\":2.5}]\n");
}

#[test]
fn invalid_format_in_config_file() {
    let file = config_file(r#"format = "xml""#);
    retype()
        .arg(format!("--config={}", file.path().display()))
        .arg("--check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid format xml"));
}

#[test]
fn unknown_key_in_config_file() {
    let file = config_file(r#"colour = "never""#);
    retype()
        .arg(format!("--config={}", file.path().display()))
        .arg("--check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn missing_explicit_config_file() {
    retype()
        .arg("--config=/nonexistent/retype.toml")
        .arg("--check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn no_time_parse_overrides_config_file() {
    let file = config_file(
        r#"
format = "json"
time_parse = true
"#,
    );

    retype()
        .arg(format!("--config={}", file.path().display()))
        .arg("--no-time-parse")
        .write_stdin(r#"[1,{"time":"2023-01-02T03:04:05Z"}]"#)
        .assert()
        .success()
        .stdout("[1,{\"time\":\"2023-01-02T03:04:05Z\"}]\n");
}

#[test]
fn time_parse_flags_conflict() {
    retype()
        .args(["--time-parse", "--no-time-parse", "--check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}
