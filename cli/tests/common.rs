//! # Mastrobot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `biorhythm.rs`,
//! etc.). Each `.rs` file in `cli/tests/` is its own test crate and pulls this
//! module in with `mod common;`.
//!

// Not every test file uses every helper.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get Mastrobot Command (`mastrobot_cmd`)
///
/// An `assert_cmd::Command` pointing at the compiled `mastrobot` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn mastrobot_cmd() -> Command {
    Command::cargo_bin("mastrobot").expect("Failed to find mastrobot binary for testing")
}

/// # Isolated Mastrobot Command (`isolated_cmd`)
///
/// Like [`mastrobot_cmd`], but running inside `dir` with the user config
/// directory pointed into `dir` as well, so neither the developer's config
/// nor a `.mastrobot.toml` above the checkout leaks into the test.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = mastrobot_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("MASTROBOT_STORE")
        .env_remove("RUST_LOG");
    cmd
}
