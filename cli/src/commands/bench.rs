//! # Mastrobot Bench Command
//!
//! File: cli/src/commands/bench.rs
//!
//! ## Overview
//!
//! `mastrobot bench` times two ways of joining a list of strings with commas:
//!
//! - **naive**: grow a result string one `"," + word` at a time. This leaves a
//!   leading comma in the output.
//! - **join**: `words.join(",")`.
//!
//! The input is `--words` random uppercase strings of `--word-len` characters;
//! each strategy runs `--iterations` times and the total wall time is printed.
//! Sizes not given on the command line come from the `[bench]` config section.
//!
//! ## Examples
//!
//! ```bash
//! $ mastrobot bench --iterations 10000
//! naive: 0.084213 s (10000 iterations, 100 words of 10 chars)
//! join: 0.011502 s (10000 iterations, 100 words of 10 chars)
//!
//! $ mastrobot bench --strategy join --seed 7
//! ```
//!
use crate::core::config;
use crate::core::error::{MastrobotError, Result};
use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// # Bench Arguments (`BenchArgs`)
#[derive(Parser, Debug)]
pub struct BenchArgs {
    /// Runs per strategy. Overrides `bench.iterations`.
    #[arg(long, short = 'n')]
    pub iterations: Option<u32>,

    /// Number of words to join. Overrides `bench.words`.
    #[arg(long)]
    pub words: Option<usize>,

    /// Characters per word. Overrides `bench.word_len`.
    #[arg(long)]
    pub word_len: Option<usize>,

    /// Which strategy to time.
    #[arg(long, value_enum, default_value_t = Strategy::Both)]
    pub strategy: Strategy,

    /// Seed for the word generator, for repeatable inputs.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Which strategies `--strategy` selects.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Naive,
    Join,
    Both,
}

impl Strategy {
    fn selected(self) -> &'static [Concat] {
        match self {
            Strategy::Naive => &[Concat::Naive],
            Strategy::Join => &[Concat::Join],
            Strategy::Both => &[Concat::Naive, Concat::Join],
        }
    }
}

/// A single concatenation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Concat {
    Naive,
    Join,
}

impl Concat {
    fn label(self) -> &'static str {
        match self {
            Concat::Naive => "naive",
            Concat::Join => "join",
        }
    }

    fn run(self, words: &[String]) -> String {
        match self {
            Concat::Naive => concat_naive(words),
            Concat::Join => concat_join(words),
        }
    }
}

/// # Handle Bench Command (`handle_bench`)
pub async fn handle_bench(args: BenchArgs) -> Result<()> {
    info!("Handling bench command with args: {:?}", args);
    let cfg = config::load_config().context("Failed to load Mastrobot configuration")?;
    let iterations = args.iterations.unwrap_or(cfg.bench.iterations);
    let word_count = args.words.unwrap_or(cfg.bench.words);
    let word_len = args.word_len.unwrap_or(cfg.bench.word_len);
    check_sizes(iterations, word_count, word_len)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let words = random_words(&mut rng, word_count, word_len);
    debug!(sample = ?words.iter().take(3).collect::<Vec<_>>(), "Generated bench input");

    for &concat in args.strategy.selected() {
        let elapsed = time_strategy(concat, &words, iterations);
        println!(
            "{}: {:.6} s ({} iterations, {} words of {} chars)",
            concat.label(),
            elapsed.as_secs_f64(),
            iterations,
            word_count,
            word_len
        );
    }
    Ok(())
}

fn check_sizes(iterations: u32, words: usize, word_len: usize) -> Result<()> {
    if iterations == 0 || words == 0 || word_len == 0 {
        anyhow::bail!(MastrobotError::ArgumentParsing(format!(
            "iterations, words and word length must be positive (got {}, {}, {})",
            iterations, words, word_len
        )));
    }
    Ok(())
}

/// `count` strings of `len` random ASCII uppercase letters.
fn random_words<R: Rng>(rng: &mut R, count: usize, len: usize) -> Vec<String> {
    (0..count)
        .map(|_| (0..len).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect())
        .collect()
}

fn concat_naive(words: &[String]) -> String {
    let mut result = String::new();
    for word in words {
        result = result + "," + word;
    }
    result
}

fn concat_join(words: &[String]) -> String {
    words.join(",")
}

fn time_strategy(concat: Concat, words: &[String], iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(concat.run(black_box(words)));
    }
    start.elapsed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_naive_has_leading_comma() {
        assert_eq!(concat_naive(&words(&["AB", "CD", "EF"])), ",AB,CD,EF");
        assert_eq!(concat_naive(&[]), "");
    }

    #[test]
    fn test_join_has_no_leading_comma() {
        assert_eq!(concat_join(&words(&["AB", "CD", "EF"])), "AB,CD,EF");
        assert_eq!(concat_join(&words(&["AB"])), "AB");
    }

    #[test]
    fn test_random_words_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = random_words(&mut rng, 100, 10);
        assert_eq!(list.len(), 100);
        assert!(list
            .iter()
            .all(|w| w.len() == 10 && w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_seed_makes_words_repeatable() {
        let a = random_words(&mut StdRng::seed_from_u64(42), 5, 8);
        let b = random_words(&mut StdRng::seed_from_u64(42), 5, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert!(check_sizes(0, 100, 10).is_err());
        assert!(check_sizes(10, 0, 10).is_err());
        assert!(check_sizes(10, 100, 0).is_err());
        assert!(check_sizes(1, 1, 1).is_ok());
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(Strategy::Both.selected(), &[Concat::Naive, Concat::Join]);
        assert_eq!(Strategy::Join.selected(), &[Concat::Join]);
        assert_eq!(Strategy::Naive.selected(), &[Concat::Naive]);
        let args = BenchArgs::try_parse_from(["bench", "--strategy", "naive", "-n", "5"]).unwrap();
        assert_eq!(args.strategy, Strategy::Naive);
        assert_eq!(args.iterations, Some(5));
        assert!(BenchArgs::try_parse_from(["bench", "--strategy", "fast"]).is_err());
    }

    #[test]
    fn test_each_concat_runs_its_own_strategy() {
        let list = words(&["AB", "CD"]);
        assert_eq!(Concat::Naive.run(&list), ",AB,CD");
        assert_eq!(Concat::Join.run(&list), "AB,CD");
        assert_eq!(Concat::Naive.label(), "naive");
        assert_eq!(Concat::Join.label(), "join");
    }
}
