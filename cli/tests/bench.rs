//! # Mastrobot Bench Command Integration Tests
//!
//! File: cli/tests/bench.rs
//!
//! Small sizes only; these check the output shape, not the timings.
//!

mod common;
use common::isolated_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_both_strategies_by_default() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["bench", "-n", "10", "--words", "5", "--word-len", "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("naive: "))
        .stdout(predicate::str::contains("join: "))
        .stdout(predicate::str::contains("(10 iterations, 5 words of 3 chars)"));
}

#[test]
fn test_single_strategy() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["bench", "-n", "10", "--words", "5", "--strategy", "join"])
        .assert()
        .success()
        .stdout(predicate::str::contains("join: "))
        .stdout(predicate::str::contains("naive: ").not());
}

#[test]
fn test_sizes_from_project_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(".mastrobot.toml"),
        "[bench]\niterations = 3\nwords = 4\nword_len = 2\n",
    )
    .unwrap();
    isolated_cmd(dir.path())
        .arg("bench")
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 iterations, 4 words of 2 chars)"));
}

#[test]
fn test_zero_iterations_fails() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["bench", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}
