// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Fuel burned per unit of lap length
pub const FUEL_PER_LENGTH_UNIT: f64 = 0.125;

/// Highest lap count; laps are exposed as an `i64` attribute
pub const MAX_LAPS: u64 = i64::MAX as u64;

pub const DEFAULT_GREETING_NAMES: [&str; 1] = ["World"];

pub const DEFAULT_COMPUTE_INPUT: i64 = 4;

pub const DEFAULT_SCIFI_AUTHORS: [&str; 9] = [
    "Isaac Asimov",
    "Ray Bradbury",
    "Robert Heinlein",
    "Arthus C. Clarke",
    "Frank Herbert",
    "Orson Scott Card",
    "Douglas Adams",
    "H. G. Wells",
    "Leigh Bracket",
];

/// Coefficients (a, b, c) of the default quadratic
pub const DEFAULT_QUADRATIC: (i64, i64, i64) = (2, 3, -5);
pub const DEFAULT_QUADRATIC_INPUTS: [i64; 3] = [0, 1, 2];

pub const DEFAULT_CAR_COLOR: &str = "red";
pub const DEFAULT_CAR_FUEL: f64 = 10.0;
pub const DEFAULT_CAR_SPEED: i64 = 200;
pub const DEFAULT_LAP_LENGTH: f64 = 4.0;
pub const DEFAULT_LAP_COUNT: usize = 3;

/// Printed between snippets when more than one runs
pub const SEPARATOR_WIDTH: usize = 40;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
