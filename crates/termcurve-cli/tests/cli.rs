//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("termcurve")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("yield curve"));
}

#[test]
fn missing_config_fails_with_context() {
    Command::cargo_bin("termcurve")
        .unwrap()
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}
