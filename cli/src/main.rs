//! # Mastrobot Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point of the Mastrobot CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`chat`, `biorhythm`, ...) is a variant of the `Commands` enum
//! - Commands map to handler functions in their modules under `commands/`
//! - The bot itself (conversation, store, biorhythm) lives in `bot/` and knows nothing about the CLI
//! - All errors propagate to this level for consistent reporting
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! mastrobot --help
//!
//! # Chat with the bot, with debug logging
//! mastrobot -vv chat --user alice
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Conversation, birthdate store, biorhythm, dispatch
mod commands; // One module per subcommand
mod common; // Shared filesystem helpers
mod core; // Errors and configuration

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "mastrobot",
    about = "Mastrobot: a birthday and biorhythm chat bot",
    long_about = "Chat with a bot that learns your birthday and reports your biorhythm.\n\
                  Also bundles a few small demos: a books API fetch, a JSON round trip\n\
                  and a string-concatenation benchmark.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// All top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat with the bot over stdin.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print a biorhythm for a birthdate or a stored user.
    #[command(alias = "b")]
    Biorhythm(commands::biorhythm::BiorhythmArgs),
    /// List books from the Stephen King API.
    Books(commands::books::BooksArgs),
    /// Write a JSON list to a file and read it back.
    #[command(name = "json-demo")]
    JsonDemo(commands::json_demo::JsonDemoArgs),
    /// Time naive concatenation against join.
    Bench(commands::bench::BenchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Biorhythm(args) => commands::biorhythm::handle_biorhythm(args).await,
        Commands::Books(args) => commands::books::handle_books(args).await,
        Commands::JsonDemo(args) => commands::json_demo::handle_json_demo(args).await,
        Commands::Bench(args) => commands::bench::handle_bench(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
