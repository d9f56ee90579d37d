//! # Mastrobot Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the Mastrobot CLI. Each
//! command defines its own arguments structure and an async handler that
//! `main.rs` calls.
//!
//! ## Commands
//!
//! - `chat`: Chat with the birthday/biorhythm bot over stdin
//! - `biorhythm`: Print a biorhythm for a birthdate or a stored user
//! - `books`: Fetch and list books from the Stephen King API
//! - `json_demo`: Write a JSON list to a file and read it back
//! - `bench`: Time two string-concatenation strategies
//!
//! A few helpers shared by several commands live here as well.
//!
use crate::core::config::Config;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Concatenation benchmark (`mastrobot bench`).
pub mod bench;
/// One-shot biorhythm report (`mastrobot biorhythm`).
pub mod biorhythm;
/// Books API fetch (`mastrobot books`).
pub mod books;
/// Interactive bot session (`mastrobot chat`).
pub mod chat;
/// JSON file round trip (`mastrobot json-demo`).
pub mod json_demo;

/// Returns `today`, or the local calendar date when not given.
pub(crate) fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// The birthdate store file: `--store` / `MASTROBOT_STORE` first, then
/// `store.path` from configuration. `None` means an in-memory store.
///
/// A leading `~` in the command-line value is expanded like the configured one.
pub(crate) fn resolve_store_path(cli: Option<PathBuf>, cfg: &Config) -> Option<PathBuf> {
    match cli {
        Some(path) => Some(match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path,
        }),
        None => cfg.store.path.as_ref().map(PathBuf::from),
    }
}
