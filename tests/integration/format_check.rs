//! Integration tests for load-time validation of format and pattern.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn retype() -> Command {
    let mut cmd = Command::cargo_bin("retype").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/retype-test-no-config");
    cmd
}

#[test]
fn accepted_formats_any_case() {
    for format in ["", "none", "NONE", "ltsv", "LTSV", "json", "Json", "regexp", "REGEXP"] {
        retype()
            .arg("--check")
            .arg(format!("--format={format}"))
            .arg("--regexp=(?P<all>.*)")
            .assert()
            .success();
    }
}

#[test]
fn invalid_format_exits_one() {
    retype()
        .arg("--format=xml")
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid format xml"))
        .stdout("");
}

#[test]
fn invalid_pattern_exits_one() {
    retype()
        .args(["--check", "--regexp=(unclosed"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn regexp_format_without_pattern_exits_one() {
    retype()
        .args(["--check", "--format=regexp"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires a pattern"));
}

#[test]
fn check_prints_effective_settings() {
    retype()
        .args([
            "--check",
            "--format=regexp",
            r"--regexp=^(?P<host>\S+) (?P<code>\d+)$",
            "--convert=code:integer,junk,host:text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("format: regexp"))
        .stdout(predicate::str::contains("captures: host,code"))
        .stdout(predicate::str::contains("convert: code:integer\n"));
}

#[test]
fn externally_decoded_formats_cannot_stream() {
    retype()
        .args(["--format=ltsv"])
        .write_stdin("a:1\tb:2\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("decoded upstream"));
}
