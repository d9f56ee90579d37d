//! # Biorhythm Calculator
//!
//! File: cli/src/bot/biorhythm.rs
//!
//! ## Overview
//!
//! Computes the three classic biorhythm waves for a person born on
//! `birthdate`, as seen on `today`:
//!
//! | Cycle        | Period (days) |
//! |--------------|---------------|
//! | Physical     | 23            |
//! | Emotional    | 28            |
//! | Intellectual | 33            |
//!
//! Each wave is `sin(2π · days / period)`. The reported value is that sine
//! as a percentage truncated (not rounded) to two decimals, and a cycle is
//! on a *critical day* when its raw sine is exactly `0.0`.
//!
//! The exact-zero comparison only fires on exact boundaries (in practice, day
//! zero). It is kept as a plain float equality on purpose; do not replace it
//! with an epsilon check.
//!
use chrono::NaiveDate;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// One of the three biorhythm cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Physical,
    Emotional,
    Intellectual,
}

impl Cycle {
    pub const ALL: [Cycle; 3] = [Cycle::Physical, Cycle::Emotional, Cycle::Intellectual];

    /// Length of the cycle in days.
    pub fn period(self) -> u32 {
        match self {
            Cycle::Physical => 23,
            Cycle::Emotional => 28,
            Cycle::Intellectual => 33,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Cycle::Physical => "Physical",
            Cycle::Emotional => "Emotional",
            Cycle::Intellectual => "Intellectual",
        }
    }
}

/// The reading of a single cycle on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleReading {
    /// Percentage in `[-100, 100]`, truncated to two decimals.
    pub value: f64,
    /// `true` when the raw sine is exactly zero.
    pub critical: bool,
}

/// All three readings for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Biorhythm {
    pub days_elapsed: i64,
    pub physical: CycleReading,
    pub emotional: CycleReading,
    pub intellectual: CycleReading,
}

impl Biorhythm {
    pub fn reading(&self, cycle: Cycle) -> CycleReading {
        match cycle {
            Cycle::Physical => self.physical,
            Cycle::Emotional => self.emotional,
            Cycle::Intellectual => self.intellectual,
        }
    }

    /// Cycles currently on a critical day, in physical/emotional/intellectual order.
    pub fn critical_cycles(&self) -> Vec<Cycle> {
        Cycle::ALL
            .into_iter()
            .filter(|c| self.reading(*c).critical)
            .collect()
    }

    /// Reply lines: one per cycle (`"Physical: 12.34"`), plus a
    /// `"Critical day: ..."` line when any cycle is critical.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Cycle::ALL
            .into_iter()
            .map(|c| format!("{}: {}", c.label(), self.reading(c)))
            .collect();
        let critical = self.critical_cycles();
        if !critical.is_empty() {
            let names: Vec<String> = critical
                .iter()
                .map(|c| c.label().to_lowercase())
                .collect();
            lines.push(format!("Critical day: {}", names.join(", ")));
        }
        lines
    }
}

impl fmt::Display for CycleReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Computes the biorhythm of someone born on `birthdate` as of `today`.
///
/// `birthdate` is expected not to be after `today`; this is not re-checked.
pub fn compute(birthdate: NaiveDate, today: NaiveDate) -> Biorhythm {
    let days = (today - birthdate).num_days();
    Biorhythm {
        days_elapsed: days,
        physical: reading_for(days, Cycle::Physical),
        emotional: reading_for(days, Cycle::Emotional),
        intellectual: reading_for(days, Cycle::Intellectual),
    }
}

fn reading_for(days: i64, cycle: Cycle) -> CycleReading {
    let raw = (2.0 * PI * (days as f64 / f64::from(cycle.period()))).sin();
    CycleReading {
        value: to_percentage(raw),
        critical: raw == 0.0,
    }
}

/// `trunc(raw * 10000) / 100`, with a truncated zero reported as `+0.0`.
fn to_percentage(raw: f64) -> f64 {
    let truncated = (raw * 10_000.0).trunc();
    if truncated == 0.0 {
        0.0
    } else {
        truncated / 100.0
    }
}
