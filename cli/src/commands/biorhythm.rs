//! # Mastrobot Biorhythm Command
//!
//! File: cli/src/commands/biorhythm.rs
//!
//! ## Overview
//!
//! This module implements `mastrobot biorhythm`, a one-shot version of the
//! bot's `/biorhythm` command. The birthdate comes either straight from
//! `--birthdate` or from the birthdate store via `--user`.
//!
//! ## Examples
//!
//! ```bash
//! mastrobot biorhythm --birthdate 1990-05-17
//! mastrobot biorhythm --user alice --store ~/birthdates.json --today 2024-06-15
//! mastrobot biorhythm --birthdate 1990-05-17 --json
//! ```
//!
//! Example output:
//!
//! ```text
//! Biorhythm for 1990-05-17 on 2024-06-15 (day 12448):
//! Physical: 97.90
//! Emotional: -43.38
//! Intellectual: 97.18
//! ```
//!
use super::{resolve_store_path, today_or_local};
use crate::bot::{biorhythm, store};
use crate::core::config;
use crate::core::error::{MastrobotError, Result};
use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Biorhythm Arguments (`BiorhythmArgs`)
#[derive(Parser, Debug)]
pub struct BiorhythmArgs {
    /// Birthdate (YYYY-MM-DD).
    #[arg(long, conflicts_with = "user", required_unless_present = "user")]
    pub birthdate: Option<NaiveDate>,

    /// Look the birthdate up in the store instead.
    #[arg(long)]
    pub user: Option<String>,

    /// Date to compute the biorhythm for (YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// JSON birthdate store used with `--user`. Overrides `store.path`.
    #[arg(long, env = "MASTROBOT_STORE")]
    pub store: Option<PathBuf>,

    /// Print the readings as JSON.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Biorhythm Command (`handle_biorhythm`)
pub async fn handle_biorhythm(args: BiorhythmArgs) -> Result<()> {
    info!("Handling biorhythm command with args: {:?}", args);
    let today = today_or_local(args.today);

    let birthdate = match (args.birthdate, &args.user) {
        (Some(date), _) => date,
        (None, Some(user)) => lookup_birthdate(user, args.store.clone())?,
        (None, None) => anyhow::bail!(MastrobotError::ArgumentParsing(
            "either --birthdate or --user is required".to_string()
        )),
    };
    if birthdate > today {
        anyhow::bail!(MastrobotError::BirthdateInFuture { birthdate, today });
    }

    let reading = biorhythm::compute(birthdate, today);
    if args.json {
        let json = serde_json::to_string_pretty(&reading)
            .context("Failed to serialize biorhythm")?;
        println!("{}", json);
    } else {
        println!(
            "Biorhythm for {} on {} (day {}):",
            birthdate, today, reading.days_elapsed
        );
        for line in reading.report_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn lookup_birthdate(user: &str, cli_store: Option<PathBuf>) -> Result<NaiveDate> {
    let cfg = config::load_config().context("Failed to load Mastrobot configuration")?;
    let Some(path) = resolve_store_path(cli_store, &cfg) else {
        anyhow::bail!(MastrobotError::Config(
            "--user needs a birthdate store; pass --store or set store.path".to_string()
        ));
    };
    let store = store::JsonFileStore::open(&path)?;
    store::BirthdateStore::get(&store, user)?.ok_or_else(|| {
        MastrobotError::BirthdateUnknown {
            user: user.to_string(),
        }
        .into()
    })
}
