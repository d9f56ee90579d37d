//! # Mastrobot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers used by more than one command or bot component, kept apart
//! from command logic (`commands::`), bot logic (`bot::`) and core
//! infrastructure (`core::`).
//!
//! - **`fs`**: Directory creation, whole-file reads and replace-on-write, JSON files.
//!

/// Filesystem helpers (I/O, JSON files).
pub mod fs;
