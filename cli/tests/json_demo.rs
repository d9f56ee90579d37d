//! # Mastrobot JSON Demo Integration Tests
//!
//! File: cli/tests/json_demo.rs
//!

mod common;
use common::isolated_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_list_written_to_my_file() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .arg("json-demo")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[\"this\",\"is\",\"a\",\"simple\",\"list\",35]\n",
        ));
    let written = std::fs::read_to_string(dir.path().join("my_file")).unwrap();
    assert_eq!(written, r#"["this","is","a","simple","list",35]"#);
}

#[test]
fn test_custom_items_and_file() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["json-demo", "--file", "out/list.json", "red", "7", "green"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["red",7,"green"]"#));
    assert!(dir.path().join("out/list.json").is_file());
}

#[test]
fn test_file_is_a_directory_fails() {
    let dir = tempdir().unwrap();
    std::fs::create_dir(dir.path().join("taken")).unwrap();
    isolated_cmd(dir.path())
        .args(["json-demo", "--file", "taken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to move"));
}
