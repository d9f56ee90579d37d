//! # Mastrobot Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `mastrobot chat`, a line-oriented chat session with
//! the bot over stdin/stdout. Every non-empty input line is one inbound
//! message; every reply line is printed as `<bot name>: <reply>`.
//!
//! Several users can share one session: a line of the form `@bob 1990` is sent
//! as user `bob`, anything else as the `--user` given on the command line.
//! This makes it easy to see that conversations are tracked per user.
//!
//! The session ends on `bye`, `/quit`, or end of input.
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session, birthdates kept in a file
//! mastrobot chat --user alice --first-name Alice --store ~/birthdates.json
//!
//! # Scripted session with a fixed date
//! printf '/start\n1990\n5\n17\n/biorhythm\n' | mastrobot chat --today 2024-06-15
//! ```
//!
use super::{resolve_store_path, today_or_local};
use crate::bot::{store, Bot, Message};
use crate::core::{config, error::Result};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// User id for lines that do not start with `@user`.
    #[arg(long, short, default_value = "me")]
    pub user: String,

    /// First name used in the `/start` greeting. Defaults to the user id.
    #[arg(long)]
    pub first_name: Option<String>,

    /// Date to treat as today (YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// JSON file where captured birthdates are stored. Overrides `store.path`.
    #[arg(long, env = "MASTROBOT_STORE")]
    pub store: Option<PathBuf>,
}

/// The default sender of a session.
#[derive(Debug, Clone)]
struct Sender {
    user_id: String,
    first_name: String,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, opens the birthdate store and runs the session on the
/// process's stdin and stdout.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let cfg = config::load_config().context("Failed to load Mastrobot configuration")?;
    let store_path = resolve_store_path(args.store, &cfg);
    let store = store::open_store(store_path.as_deref())?;
    let mut bot = Bot::new(store);

    let sender = Sender {
        first_name: args.first_name.unwrap_or_else(|| args.user.clone()),
        user_id: args.user,
    };
    let pinned = args.today;
    let interactive = std::io::stdin().is_terminal();

    println!("Chat with {}! Type 'bye' to quit.", cfg.bot.name);
    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(
        &mut bot,
        &cfg.bot.name,
        &sender,
        move || today_or_local(pinned),
        reader,
        &mut stdout,
        interactive,
    )
    .await
}

/// Reads messages from `reader` until `bye`, `/quit` or end of input and
/// writes every reply to `out`.
///
/// `today` is asked for the date once per message, so a session left open
/// past midnight sees the new day.
async fn run_session<C, R, W>(
    bot: &mut Bot,
    bot_name: &str,
    sender: &Sender,
    mut today: C,
    reader: R,
    out: &mut W,
    interactive: bool,
) -> Result<()>
where
    C: FnMut() -> NaiveDate,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    loop {
        if interactive {
            write!(out, "You: ")?;
            out.flush().context("Failed to flush stdout")?;
        }
        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            debug!("End of input, closing chat session.");
            break;
        };

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("bye") || trimmed.eq_ignore_ascii_case("/quit") {
            writeln!(out, "{}: Goodbye!", bot_name)?;
            break;
        }
        let Some(message) = parse_line(trimmed, sender) else {
            continue;
        };

        for reply in bot.handle(&message, today()) {
            writeln!(out, "{}: {}", bot_name, reply)?;
        }
        debug!(
            user = %message.user_id,
            state = ?bot.tracker().state(&message.user_id),
            "Message handled"
        );
    }
    Ok(())
}

/// Turns an input line into a message. `@name text` is sent by `name`;
/// blank lines (or a bare `@name`) produce nothing.
fn parse_line(line: &str, sender: &Sender) -> Option<Message> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(rest) = line.strip_prefix('@') {
        let (user, text) = rest.split_once(char::is_whitespace)?;
        let text = text.trim();
        if user.is_empty() || text.is_empty() {
            return None;
        }
        return Some(Message::new(user, user, text));
    }
    Some(Message::new(&sender.user_id, &sender.first_name, line))
}
