//! # Conversation Tracker
//!
//! File: cli/src/bot/tracker.rs
//!
//! ## Overview
//!
//! Keeps one birthday conversation per user. Each inbound free-text message is
//! looked up by user id, fed through `conversation::handle_text`, and the
//! resulting state is written back. Users never see or affect each other's
//! progress.
//!
//! A session only exists while a user is somewhere between `/start` and a
//! captured birthdate; an absent entry means `Idle`.
//!
use super::conversation::{self, ConversationState, PartialBirthdate};
use super::store::BirthdateStore;
use crate::core::error::Result;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

/// State of one user's birthday conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub state: ConversationState,
    pub partial: PartialBirthdate,
}

#[derive(Debug, Default)]
pub struct ConversationTracker {
    sessions: HashMap<String, Session>,
}

impl ConversationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) birthday collection for `user` with an empty partial date.
    pub fn begin(&mut self, user: &str) {
        debug!(user, "Starting birthday collection");
        self.sessions.insert(
            user.to_string(),
            Session {
                state: ConversationState::AwaitingYear,
                partial: PartialBirthdate::default(),
            },
        );
    }

    pub fn state(&self, user: &str) -> ConversationState {
        self.session(user).state
    }

    pub fn session(&self, user: &str) -> Session {
        self.sessions.get(user).copied().unwrap_or_default()
    }

    /// Feeds a free-text message from `user` into their conversation.
    ///
    /// Returns `Ok(None)` when the user is idle and the text is not part of a
    /// conversation. A completed birthdate is written to `store` before the
    /// session is cleared; if that write fails the user stays in
    /// `AwaitingDay` and the error is returned.
    pub fn handle_text(
        &mut self,
        user: &str,
        text: &str,
        today: NaiveDate,
        store: &mut dyn BirthdateStore,
    ) -> Result<Option<String>> {
        let current = self.session(user);
        let transition = conversation::handle_text(current.state, &current.partial, text, today);

        if let Some(reason) = &transition.rejected {
            debug!(user, state = ?current.state, %reason, "Rejected input");
        }

        if let Some(birthdate) = transition.captured {
            store.save(user, birthdate)?;
            debug!(user, %birthdate, "Captured birthdate");
        }

        if transition.next_state != current.state {
            debug!(user, from = ?current.state, to = ?transition.next_state, "Conversation advanced");
        }
        match transition.next_state {
            ConversationState::Idle => {
                self.sessions.remove(user);
            }
            state => {
                self.sessions.insert(
                    user.to_string(),
                    Session {
                        state,
                        partial: transition.partial,
                    },
                );
            }
        }

        Ok(transition.reply)
    }
}
