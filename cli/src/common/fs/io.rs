//! # Mastrobot Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` and `serde_json` used by the birthdate
//! store and the `json-demo` command. Every function attaches the offending
//! path to its error through `anyhow::Context`.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing; fails if the path is a file.
//! - **`read_file_to_string`**: `fs::read_to_string` with context.
//! - **`write_string_to_file`**: Ensures the parent directory exists, writes to a sibling
//!   `.tmp` file and renames it over the target, so readers never see a half-written file.
//! - **`read_json` / `write_json`**: Typed JSON on top of the two functions above.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::collections::BTreeMap;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let path = Path::new("./data/birthdates.json");
//! let mut map: BTreeMap<String, String> = BTreeMap::new();
//! map.insert("alice".into(), "1990-05-17".into());
//! io::write_json(path, &map)?;
//! let back: BTreeMap<String, String> = io::read_json(path)?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{MastrobotError, Result};
use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating it and any
/// missing parents.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(MastrobotError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to `path`, replacing any existing file.
///
/// The content goes to `<path>.tmp` first and is then renamed into place.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    // An empty parent means a bare file name relative to the working directory.
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let tmp_path = temp_sibling(path);
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write to file {:?}", tmp_path))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move {:?} into place at {:?}", tmp_path, path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Deserializes a JSON file into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file_to_string(path)?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON from {:?}", path))
}

/// Serializes `value` as pretty-printed JSON into `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize JSON for {:?}", path))?;
    write_string_to_file(path, &content)
}
