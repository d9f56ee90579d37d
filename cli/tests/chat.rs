//! # Mastrobot Chat Command Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives `mastrobot chat` through piped stdin and checks the transcript.
//! Every test pins `--today` and runs in its own temporary directory.
//!

mod common;
use common::isolated_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_chat_collects_birthday_and_reports_biorhythm() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["chat", "--first-name", "Alice", "--today", "2024-06-15"])
        .write_stdin("/start\n1990\n5\n17\n/biorhythm\nbye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat with Mastrobot! Type 'bye' to quit."))
        .stdout(predicate::str::contains("Mastrobot: Hi Alice, nice to meet you!"))
        .stdout(predicate::str::contains(
            "Mastrobot: ok, now I need to know the month (in numerical form)...",
        ))
        .stdout(predicate::str::contains("Mastrobot: great! And now, the day..."))
        .stdout(predicate::str::contains("Mastrobot: ok, you were born on 1990-05-17"))
        .stdout(predicate::str::contains("Mastrobot: Physical: 97.90"))
        .stdout(predicate::str::contains("Mastrobot: Emotional: -43.38"))
        .stdout(predicate::str::contains("Mastrobot: Intellectual: 97.18"))
        .stdout(predicate::str::contains("Mastrobot: Goodbye!"));
}

#[test]
fn test_chat_rejects_future_year() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["chat", "--today", "2024-06-15"])
        .write_stdin("/start\n2025\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mastrobot: it's funny but it doesn't seem to be correct...",
        ));
}

#[test]
fn test_chat_biorhythm_before_start() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["chat", "--today", "2024-06-15"])
        .write_stdin("/biorhythm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("send /start"));
}

#[test]
fn test_chat_persists_birthdate_to_store() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("birthdates.json");

    isolated_cmd(dir.path())
        .args(["chat", "--user", "alice", "--today", "2024-06-15"])
        .arg("--store")
        .arg(&store)
        .write_stdin("/start\n1990\n5\n17\n")
        .assert()
        .success();

    let saved = std::fs::read_to_string(&store).unwrap();
    assert!(saved.contains("\"alice\""));
    assert!(saved.contains("1990-05-17"));

    // A later session knows the birthdate without asking again.
    isolated_cmd(dir.path())
        .args(["chat", "--user", "alice", "--today", "2024-06-15"])
        .env("MASTROBOT_STORE", &store)
        .write_stdin("/biorhythm\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mastrobot: Physical: 97.90"));
}

#[test]
fn test_chat_uses_project_bot_name() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(".mastrobot.toml"),
        "[bot]\nname = \"Testbot\"\n",
    )
    .unwrap();

    isolated_cmd(dir.path())
        .args(["chat", "--today", "2024-06-15"])
        .write_stdin("hello\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Testbot: did you say \"hello\"?"))
        .stdout(predicate::str::contains("Testbot: Goodbye!"));
}

#[test]
fn test_chat_rejects_invalid_project_config() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(".mastrobot.toml"), "[bot]\nname = \"\"\n").unwrap();

    isolated_cmd(dir.path())
        .args(["chat", "--today", "2024-06-15"])
        .write_stdin("bye\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to load Mastrobot configuration"));
}

#[test]
fn test_chat_store_env_expands_tilde() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["chat", "--user", "alice", "--today", "2024-06-15"])
        .env("MASTROBOT_STORE", "~/birthdates.json")
        .write_stdin("/start\n1990\n5\n17\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mastrobot: ok, you were born on 1990-05-17"));

    let saved = std::fs::read_to_string(dir.path().join("birthdates.json")).unwrap();
    assert!(saved.contains("1990-05-17"));
    assert!(!dir.path().join("~").exists());
}
