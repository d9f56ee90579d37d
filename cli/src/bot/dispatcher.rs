//! # Bot Command Dispatcher
//!
//! File: cli/src/bot/dispatcher.rs
//!
//! ## Overview
//!
//! Turns one inbound [`Message`] into reply lines. Messages starting with `/`
//! are commands; everything else is free text, which goes to the birthday
//! conversation or, for idle users, gets echoed back.
//!
//! | Input        | Behavior                                                 |
//! |--------------|----------------------------------------------------------|
//! | `/start`     | Greets the user and begins birthday collection           |
//! | `/help`      | Lists the commands                                       |
//! | `/biorhythm` | Computes today's biorhythm from the stored birthdate     |
//! | `/other`     | Points at `/help`                                        |
//! | free text    | Next birthday answer, or an echo when no dialogue is open |
//!
//! Commands may carry a bot-name suffix (`/start@mastrobot`), as chat clients
//! add one in group chats.
//!
//! Errors raised while handling a message never escape [`Bot::handle`]: they
//! are logged and answered with a short reply so the chat keeps going.
//!
use super::biorhythm;
use super::conversation::ASK_YEAR;
use super::store::BirthdateStore;
use super::tracker::ConversationTracker;
use crate::core::error::{MastrobotError, Result};
use chrono::NaiveDate;
use tracing::{debug, error, info};

/// Reply used when handling a message failed unexpectedly.
pub const GENERIC_ERROR: &str = "an error occurred";

const HELP_TEXT: &[&str] = &[
    "/start - tell me your birthday",
    "/biorhythm - your biorhythm for today",
    "/help - this list",
];

/// One inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub user_id: String,
    pub first_name: String,
    pub text: String,
}

impl Message {
    pub fn new(user_id: &str, first_name: &str, text: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            first_name: first_name.to_string(),
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Biorhythm,
    Unknown(String),
}

impl Command {
    /// Parses `text` as a command. Returns `None` for free text.
    pub fn parse(text: &str) -> Option<Command> {
        let word = text.trim().split_whitespace().next()?;
        let name = word.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or_default();
        Some(match name.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "biorhythm" => Command::Biorhythm,
            _ => Command::Unknown(word.to_string()),
        })
    }
}

/// The chat bot: per-user conversations plus the birthdate store.
pub struct Bot {
    tracker: ConversationTracker,
    store: Box<dyn BirthdateStore>,
}

impl Bot {
    pub fn new(store: Box<dyn BirthdateStore>) -> Self {
        Self {
            tracker: ConversationTracker::new(),
            store,
        }
    }

    pub fn tracker(&self) -> &ConversationTracker {
        &self.tracker
    }

    /// Handles one message and returns the reply lines, in order.
    pub fn handle(&mut self, message: &Message, today: NaiveDate) -> Vec<String> {
        debug!(user = %message.user_id, text = %message.text, "Inbound message");
        match self.dispatch(message, today) {
            Ok(replies) => replies,
            Err(e) => match e.downcast_ref::<MastrobotError>() {
                Some(MastrobotError::BirthdateUnknown { .. }) => {
                    info!(user = %message.user_id, "Biorhythm requested before a birthdate was given");
                    vec!["I don't know your birthday yet, send /start to tell me.".to_string()]
                }
                _ => {
                    error!(user = %message.user_id, "Failed to handle message: {:?}", e);
                    vec![GENERIC_ERROR.to_string()]
                }
            },
        }
    }

    fn dispatch(&mut self, message: &Message, today: NaiveDate) -> Result<Vec<String>> {
        match Command::parse(&message.text) {
            Some(Command::Start) => Ok(self.start(message)),
            Some(Command::Help) => Ok(HELP_TEXT.iter().map(|l| l.to_string()).collect()),
            Some(Command::Biorhythm) => self.biorhythm(&message.user_id, today),
            Some(Command::Unknown(word)) => Ok(vec![format!(
                "unknown command: {}, try /help",
                word
            )]),
            None => self.text(message, today),
        }
    }

    fn start(&mut self, message: &Message) -> Vec<String> {
        self.tracker.begin(&message.user_id);
        vec![
            format!("Hi {}, nice to meet you!", message.first_name),
            ASK_YEAR.to_string(),
        ]
    }

    fn biorhythm(&self, user: &str, today: NaiveDate) -> Result<Vec<String>> {
        let birthdate = self
            .store
            .get(user)?
            .ok_or_else(|| MastrobotError::BirthdateUnknown {
                user: user.to_string(),
            })?;
        let reading = biorhythm::compute(birthdate, today);
        debug!(user, %birthdate, days = reading.days_elapsed, "Computed biorhythm");
        Ok(reading.report_lines())
    }

    fn text(&mut self, message: &Message, today: NaiveDate) -> Result<Vec<String>> {
        let reply = self.tracker.handle_text(
            &message.user_id,
            &message.text,
            today,
            self.store.as_mut(),
        )?;
        Ok(match reply {
            Some(reply) => vec![reply],
            None => vec![format!("did you say \"{}\"?", message.text.trim())],
        })
    }
}
