//! # Mastrobot JSON Demo Command
//!
//! File: cli/src/commands/json_demo.rs
//!
//! ## Overview
//!
//! `mastrobot json-demo` writes a list as JSON to a file, reads the file back
//! and prints what was read. Items that parse as integers are stored as JSON
//! numbers, everything else as strings.
//!
//! ## Examples
//!
//! ```bash
//! $ mastrobot json-demo
//! ["this","is","a","simple","list",35]
//!
//! $ mastrobot json-demo --file /tmp/list.json red green 7
//! ["red","green",7]
//! ```
//!
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # JSON Demo Arguments (`JsonDemoArgs`)
#[derive(Parser, Debug)]
pub struct JsonDemoArgs {
    /// File to write the list to.
    #[arg(long, short, default_value = "my_file")]
    pub file: PathBuf,

    /// List items. Defaults to `this is a simple list 35`.
    pub items: Vec<String>,
}

/// # Handle JSON Demo Command (`handle_json_demo`)
pub async fn handle_json_demo(args: JsonDemoArgs) -> Result<()> {
    info!("Handling json-demo command with args: {:?}", args);
    let list = if args.items.is_empty() {
        default_list()
    } else {
        args.items.iter().map(|s| to_json_value(s)).collect()
    };

    let read_back = round_trip(&args.file, &list)?;
    println!(
        "{}",
        serde_json::to_string(&read_back).context("Failed to serialize list")?
    );
    Ok(())
}

fn default_list() -> Vec<Value> {
    vec![
        Value::from("this"),
        Value::from("is"),
        Value::from("a"),
        Value::from("simple"),
        Value::from("list"),
        Value::from(35),
    ]
}

fn to_json_value(item: &str) -> Value {
    match item.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(item),
    }
}

/// Writes `list` to `path` and returns what reading it back yields.
fn round_trip(path: &Path, list: &[Value]) -> Result<Vec<Value>> {
    let json = serde_json::to_string(list).context("Failed to serialize list")?;
    io::write_string_to_file(path, &json)?;
    debug!(path = %path.display(), bytes = json.len(), "Wrote JSON list");
    io::read_json(path)
}
