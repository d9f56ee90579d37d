//! # Mastrobot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Groups filesystem helpers. Currently only `io`, which covers directory
//! creation, whole-file reads and writes, and typed JSON files.
//!

/// Basic file I/O (e.g., `ensure_dir_exists`, `write_string_to_file`, `read_json`).
pub mod io;
