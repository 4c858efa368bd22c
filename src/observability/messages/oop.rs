// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for race car state changes.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// A lap was run.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct LapCompleted {
    pub length: f64,
    pub laps: u64,
    pub fuel_remaining: f64,
}

impl Display for LapCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Lap {} of length {} completed: fuel_remaining={}",
            self.laps, self.length, self.fuel_remaining
        )
    }
}

impl StructuredLog for LapCompleted {
    fn log(&self) {
        tracing::debug!(
            length = self.length,
            laps = self.laps,
            fuel_remaining = self.fuel_remaining,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("lap", span_name = name, laps = self.laps)
    }
}

/// Fuel dropped below zero. Laps keep running; this is only reported.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use the_snippets::observability::messages::oop::FuelExhausted;
///
/// let msg = FuelExhausted { color: "red", fuel_remaining: -0.5 };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct FuelExhausted<'a> {
    pub color: &'a str,
    pub fuel_remaining: f64,
}

impl Display for FuelExhausted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "The {} race car is running on empty: fuel_remaining={}",
            self.color, self.fuel_remaining
        )
    }
}

impl StructuredLog for FuelExhausted<'_> {
    fn log(&self) {
        tracing::warn!(
            color = self.color,
            fuel_remaining = self.fuel_remaining,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("fuel", span_name = name, color = self.color)
    }
}
