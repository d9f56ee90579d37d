//! # Mastrobot Books Command
//!
//! File: cli/src/commands/books.rs
//!
//! ## Overview
//!
//! `mastrobot books` fetches the book list from the Stephen King API (or any
//! endpoint answering with the same shape) and prints one `Year - Title` line
//! per book.
//!
//! The endpoint answers with:
//!
//! ```json
//! { "data": [ { "id": 1, "Year": 1974, "Title": "Carrie", ... }, ... ] }
//! ```
//!
//! Only `Year` and `Title` are read; every other field is ignored.
//!
//! ## Examples
//!
//! ```bash
//! mastrobot books
//! mastrobot books --limit 5
//! mastrobot books --url http://localhost:8080/api/books
//! ```
//!
use crate::core::config;
use crate::core::error::{MastrobotError, Result};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// # Books Arguments (`BooksArgs`)
#[derive(Parser, Debug)]
pub struct BooksArgs {
    /// Endpoint to query. Overrides `books.api_url`.
    #[arg(long)]
    pub url: Option<String>,

    /// Print at most this many books.
    #[arg(long, short)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct BooksResponse {
    data: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Book {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Title")]
    title: String,
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.year, self.title)
    }
}

/// # Handle Books Command (`handle_books`)
pub async fn handle_books(args: BooksArgs) -> Result<()> {
    info!("Handling books command with args: {:?}", args);
    let cfg = config::load_config().context("Failed to load Mastrobot configuration")?;
    let url = args.url.unwrap_or(cfg.books.api_url);
    let timeout = Duration::from_secs(cfg.books.timeout_secs);

    let books = fetch_books(&url, timeout).await?;
    let limit = args.limit.unwrap_or(books.len());
    for book in books.iter().take(limit) {
        println!("{}", book);
    }
    Ok(())
}

async fn fetch_books(url: &str, timeout: Duration) -> Result<Vec<Book>> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(MastrobotError::from)?;

    debug!(url, "Requesting book list");
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(MastrobotError::from)
        .with_context(|| format!("Failed to reach {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!(MastrobotError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: BooksResponse = resp
        .json()
        .await
        .map_err(MastrobotError::from)
        .context("Unexpected response from the books API")?;
    debug!(count = parsed.data.len(), "Received books");
    Ok(parsed.data)
}
