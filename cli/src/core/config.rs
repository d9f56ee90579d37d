//! # Mastrobot Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Mastrobot, handling
//! loading, merging, validation, and access to configuration data. It combines
//! defaults, user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.mastrobot.toml` in current directory or ancestors
//! 2. User-specific `config.toml` in the platform config dir (e.g. `~/.config/mastrobot/`)
//! 3. Default values defined in the code
//!
//! Command-line flags override all of these; that merge happens in the
//! command handlers.
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! name = "Mastrobot"
//!
//! [store]
//! path = "~/mastrobot/birthdates.json"
//!
//! [books]
//! api_url = "https://stephen-king-api.onrender.com/api/books"
//! timeout_secs = 30
//!
//! [bench]
//! iterations = 100000
//! words = 100
//! word_len = 10
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! println!("{}: hello", cfg.bot.name);
//! ```
//!
use crate::core::error::{MastrobotError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub books: BooksConfig,
    #[serde(default)]
    pub bench: BenchConfig,
}

/// Settings for the chat bot itself.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Name printed in front of every reply in the chat REPL.
    #[serde(default = "default_bot_name")]
    pub name: String,
}

/// Where captured birthdates are kept.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// JSON file holding `{user: birthdate}` (can use ~). `None` keeps
    /// birthdates in memory for the lifetime of the process.
    pub path: Option<String>,
}

/// Settings for `mastrobot books`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BooksConfig {
    #[serde(default = "default_books_api_url")]
    pub api_url: String,
    /// Whole-request timeout in seconds.
    #[serde(default = "default_books_timeout_secs")]
    pub timeout_secs: u64,
}

/// Default sizes for `mastrobot bench`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    #[serde(default = "default_bench_iterations")]
    pub iterations: u32,
    #[serde(default = "default_bench_words")]
    pub words: usize,
    #[serde(default = "default_bench_word_len")]
    pub word_len: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
        }
    }
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            api_url: default_books_api_url(),
            timeout_secs: default_books_timeout_secs(),
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: default_bench_iterations(),
            words: default_bench_words(),
            word_len: default_bench_word_len(),
        }
    }
}

fn default_bot_name() -> String {
    "Mastrobot".to_string()
}
fn default_books_api_url() -> String {
    "https://stephen-king-api.onrender.com/api/books".to_string()
}
fn default_books_timeout_secs() -> u64 {
    30
}
fn default_bench_iterations() -> u32 {
    100_000
}
fn default_bench_words() -> usize {
    100
}
fn default_bench_word_len() -> usize {
    10
}

const PROJECT_CONFIG_FILENAME: &str = ".mastrobot.toml";

/// Loads, merges, expands and validates the configuration for the current
/// working directory.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config = load_user_config()?;
    let project_config = load_project_config(&current_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Mastrobot", "mastrobot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.mastrobot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` up through its ancestors looking for `.mastrobot.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for path in start.ancestors() {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Field-by-field merge: a project value wins whenever it differs from the
/// built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.bot.name = if project_cfg.bot.name != default_bot_name() {
        project_cfg.bot.name
    } else {
        user.bot.name
    };
    merged.store.path = project_cfg.store.path.or(user.store.path);
    merged.books.api_url = if project_cfg.books.api_url != default_books_api_url() {
        project_cfg.books.api_url
    } else {
        user.books.api_url
    };
    merged.books.timeout_secs = if project_cfg.books.timeout_secs != default_books_timeout_secs()
    {
        project_cfg.books.timeout_secs
    } else {
        user.books.timeout_secs
    };
    merged.bench.iterations = if project_cfg.bench.iterations != default_bench_iterations() {
        project_cfg.bench.iterations
    } else {
        user.bench.iterations
    };
    merged.bench.words = if project_cfg.bench.words != default_bench_words() {
        project_cfg.bench.words
    } else {
        user.bench.words
    };
    merged.bench.word_len = if project_cfg.bench.word_len != default_bench_word_len() {
        project_cfg.bench.word_len
    } else {
        user.bench.word_len
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(path) = config.store.path.as_mut() {
        *path = shellexpand::tilde(path).into_owned();
        debug!("Expanded store path: {}", path);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(MastrobotError::Config(
            "bot.name cannot be empty.".to_string()
        )));
    }
    if let Some(path) = &config.store.path {
        if path.is_empty() {
            return Err(anyhow!(MastrobotError::Config(
                "store.path cannot be empty; remove it to keep birthdates in memory.".to_string()
            )));
        }
        if Path::new(path).is_dir() {
            return Err(anyhow!(MastrobotError::Config(format!(
                "Configured store path '{}' is a directory, expected a JSON file.",
                path
            ))));
        }
    }
    let url = &config.books.api_url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(anyhow!(MastrobotError::Config(format!(
            "Invalid books.api_url '{}'. Expected an http:// or https:// URL.",
            url
        ))));
    }
    if config.books.timeout_secs == 0 {
        return Err(anyhow!(MastrobotError::Config(
            "books.timeout_secs must be greater than zero.".to_string()
        )));
    }
    if config.bench.iterations == 0 || config.bench.words == 0 || config.bench.word_len == 0 {
        return Err(anyhow!(MastrobotError::Config(
            "bench.iterations, bench.words and bench.word_len must all be greater than zero."
                .to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
