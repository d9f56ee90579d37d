//! # Mastrobot Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the application-level error types used throughout
//! Mastrobot. Input validation inside a conversation has its own error type
//! (`bot::conversation::InputError`) because those errors never leave the
//! conversation; everything here is something a command can fail with.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `MastrobotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors
//! - Filesystem and birthdate store errors
//! - HTTP errors from the books API
//! - Missing birthdates for `/biorhythm`
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(MastrobotError::FileSystem(format!("Path not found: {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<MastrobotError>(), Some(MastrobotError::BirthdateUnknown { .. })) => {
//!         println!("Send /start first");
//!     }
//!     other => other?,
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the Mastrobot application.
#[derive(Error, Debug)]
pub enum MastrobotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Birthdate store error: {0}")]
    Store(String),

    #[error("No birthdate known for user '{user}'.")]
    BirthdateUnknown { user: String },

    #[error("Birthdate {birthdate} is after {today}.")]
    BirthdateInFuture {
        birthdate: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    #[error("HTTP request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("HTTP client error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
