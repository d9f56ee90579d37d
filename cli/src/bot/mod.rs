//! # Mastrobot Bot Core (`bot`)
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! Everything the chat bot knows, independent of how messages arrive:
//!
//! - **`conversation`**: The birthday dialogue as a pure state machine (year, month, day).
//! - **`tracker`**: One conversation per user id, committing finished birthdates to the store.
//! - **`store`**: Where birthdates live (`MemoryStore`, `JsonFileStore`).
//! - **`biorhythm`**: The physical/emotional/intellectual wave calculation.
//! - **`dispatcher`**: `Bot`, routing commands and free text to the pieces above.
//!
//! The `chat` command is the transport: it reads lines, wraps them in
//! [`Message`]s and prints whatever [`Bot::handle`] returns.
//!
//! ```rust
//! use crate::bot::{store::MemoryStore, Bot, Message};
//!
//! let mut bot = Bot::new(Box::new(MemoryStore::new()));
//! let today = chrono::Local::now().date_naive();
//! for line in bot.handle(&Message::new("42", "Alice", "/start"), today) {
//!     println!("{}", line);
//! }
//! ```
//!

/// Biorhythm wave calculation.
pub mod biorhythm;
/// Birthday-collection state machine.
pub mod conversation;
/// Command routing (`Bot`, `Message`, `Command`).
pub mod dispatcher;
/// Per-user birthdate storage.
pub mod store;
/// Per-user conversation sessions.
pub mod tracker;

pub use dispatcher::{Bot, Message};
