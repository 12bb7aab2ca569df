use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("artcat")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("heritage"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_reports_version() {
    Command::cargo_bin("artcat")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("artcat")
        .unwrap()
        .arg("paint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn missing_subcommand_shows_usage() {
    Command::cargo_bin("artcat")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
