//! # Birthdate Store
//!
//! File: cli/src/bot/store.rs
//!
//! ## Overview
//!
//! Per-user storage for captured birthdates: the only thing the birthday
//! conversation leaves behind once it finishes.
//!
//! ## Architecture
//!
//! - `BirthdateStore`: the trait the bot talks to.
//! - `MemoryStore`: a `HashMap`, lost when the process exits. Used when no
//!   store path is configured, and in tests.
//! - `JsonFileStore`: a JSON object `{"<user>": "YYYY-MM-DD", ...}` on disk.
//!   The whole file is loaded on open and rewritten on every save.
//!
//! `open_store` picks one of the two from an optional path.
//!
use crate::common::fs::io;
use crate::core::error::{MastrobotError, Result};
use anyhow::Context;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage of `{user id -> birthdate}`.
pub trait BirthdateStore {
    /// Returns the stored birthdate of `user`, if any.
    fn get(&self, user: &str) -> Result<Option<NaiveDate>>;

    /// Stores (or replaces) the birthdate of `user`.
    fn save(&mut self, user: &str, birthdate: NaiveDate) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    birthdates: HashMap<String, NaiveDate>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BirthdateStore for MemoryStore {
    fn get(&self, user: &str) -> Result<Option<NaiveDate>> {
        Ok(self.birthdates.get(user).copied())
    }

    fn save(&mut self, user: &str, birthdate: NaiveDate) -> Result<()> {
        self.birthdates.insert(user.to_string(), birthdate);
        Ok(())
    }
}

/// Birthdates persisted as a JSON object. `BTreeMap` keeps the file sorted by
/// user so rewrites produce stable diffs.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    birthdates: BTreeMap<String, NaiveDate>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; the file
    /// is created on the first save.
    pub fn open(path: &Path) -> Result<Self> {
        if path.is_dir() {
            anyhow::bail!(MastrobotError::Store(format!(
                "'{}' is a directory, expected a JSON file",
                path.display()
            )));
        }
        let birthdates: BTreeMap<String, NaiveDate> = if path.exists() {
            io::read_json(path)
                .with_context(|| format!("Failed to load birthdates from {}", path.display()))?
        } else {
            debug!(
                "Birthdate store {} does not exist yet, starting empty.",
                path.display()
            );
            BTreeMap::new()
        };
        info!(
            "Opened birthdate store {} ({} user(s))",
            path.display(),
            birthdates.len()
        );
        Ok(Self {
            path: path.to_path_buf(),
            birthdates,
        })
    }
}

impl BirthdateStore for JsonFileStore {
    fn get(&self, user: &str) -> Result<Option<NaiveDate>> {
        Ok(self.birthdates.get(user).copied())
    }

    fn save(&mut self, user: &str, birthdate: NaiveDate) -> Result<()> {
        let previous = self.birthdates.insert(user.to_string(), birthdate);
        if let Err(e) = io::write_json(&self.path, &self.birthdates) {
            // Keep memory and disk in agreement.
            match previous {
                Some(old) => self.birthdates.insert(user.to_string(), old),
                None => self.birthdates.remove(user),
            };
            return Err(e.context(MastrobotError::Store(format!(
                "could not save birthdate of '{}'",
                user
            ))));
        }
        debug!("Saved birthdate of '{}' to {}", user, self.path.display());
        Ok(())
    }
}

/// Opens a `JsonFileStore` when `path` is given, otherwise a `MemoryStore`.
pub fn open_store(path: Option<&Path>) -> Result<Box<dyn BirthdateStore>> {
    match path {
        Some(p) => Ok(Box::new(JsonFileStore::open(p)?)),
        None => {
            debug!("No store path configured; birthdates are kept in memory.");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}
