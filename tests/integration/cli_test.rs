//! Tests for the binary's CLI surface and startup preconditions.
//!
//! The editor itself needs a real tty, so these tests only cover the
//! paths reachable without one: flag parsing and the non-tty bailout.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_flag_prints_crate_version() {
    Command::cargo_bin("ked")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_mentions_vim_mode() {
    Command::cargo_bin("ked")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--vim"));
}

#[test]
fn refuses_to_run_without_a_tty() {
    // Piped stdin/stdout is not a terminal
    Command::cargo_bin("ked")
        .unwrap()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be a terminal"));
}

#[test]
fn unknown_flags_are_rejected() {
    Command::cargo_bin("ked")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .failure();
}
