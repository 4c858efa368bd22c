// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::consts::{
    DEFAULT_CAR_COLOR, DEFAULT_CAR_FUEL, DEFAULT_CAR_SPEED, DEFAULT_LAP_LENGTH, DEFAULT_LAP_COUNT,
};
use crate::errors::SnippetError;
use crate::oop::RaceCar;
use crate::traits::Snippet;
use crate::value::{AsciiRepr, Value};

/// Configuration for the race car snippet
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RaceCarConfig {
    pub color: String,
    pub fuel_remaining: f64,
    /// Extra attributes, applied in order after the fixed ones
    pub extras: IndexMap<String, Value>,
    /// Length of each lap to run
    pub laps: Vec<f64>,
    /// Print the final car as JSON instead of one attribute per line
    pub json: bool,
}

impl Default for RaceCarConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_CAR_COLOR.to_string(),
            fuel_remaining: DEFAULT_CAR_FUEL,
            extras: IndexMap::from([("speed".to_string(), Value::Int(DEFAULT_CAR_SPEED))]),
            laps: vec![DEFAULT_LAP_LENGTH; DEFAULT_LAP_COUNT],
            json: false,
        }
    }
}

/// Race car snippet - builds a car with extra attributes and runs laps
pub struct RaceCarSnippet {
    car: RaceCar,
    laps: Vec<f64>,
    json: bool,
}

impl RaceCarSnippet {
    /// Build the snippet, rejecting extras that clash with a fixed attribute's
    /// type and any fuel level or lap length that is not finite.
    pub fn new(config: RaceCarConfig) -> Result<Self, SnippetError> {
        let car = RaceCar::new(config.color, config.fuel_remaining, config.extras)?;
        ensure_finite("fuel_remaining", car.fuel_remaining())?;
        for length in &config.laps {
            ensure_finite("laps", *length)?;
        }

        Ok(Self {
            car,
            laps: config.laps,
            json: config.json,
        })
    }
}

impl Snippet for RaceCarSnippet {
    fn run(&self, out: &mut dyn Write) -> Result<(), SnippetError> {
        let mut car = self.car.clone();
        for length in &self.laps {
            car.run_lap(*length)?;
        }

        if self.json {
            // JSON has no infinity or NaN; serde_json would write `null`.
            ensure_finite("fuel_remaining", car.fuel_remaining())?;
            writeln!(out, "{}", serde_json::to_string(&car)?)?;
            return Ok(());
        }

        for name in car.attr_names() {
            writeln!(out, "{} = {}", name, car.get_attr(name)?.repr())?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "race_car"
    }
}

fn ensure_finite(name: &str, value: f64) -> Result<(), SnippetError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SnippetError::NonFinite {
            name: name.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(snippet: &RaceCarSnippet) -> String {
        let mut out = Vec::new();
        snippet.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_output() {
        let snippet = RaceCarSnippet::new(RaceCarConfig::default()).unwrap();
        assert_eq!(
            run_to_string(&snippet),
            "color = 'red'\nfuel_remaining = 8.5\nlaps = 3\nspeed = 200\n"
        );
    }

    #[test]
    fn test_runs_are_independent() {
        let snippet = RaceCarSnippet::new(RaceCarConfig::default()).unwrap();
        assert_eq!(run_to_string(&snippet), run_to_string(&snippet));
    }

    #[test]
    fn test_json_output() {
        let snippet = RaceCarSnippet::new(RaceCarConfig {
            laps: vec![4.0],
            json: true,
            ..RaceCarConfig::default()
        })
        .unwrap();

        assert_eq!(
            run_to_string(&snippet),
            "{\"color\":\"red\",\"fuel_remaining\":9.5,\"laps\":1,\"speed\":200}\n"
        );
    }

    #[test]
    fn test_rejects_mistyped_fixed_attribute() {
        let config = RaceCarConfig {
            extras: IndexMap::from([("laps".to_string(), Value::from("many"))]),
            ..RaceCarConfig::default()
        };
        assert!(matches!(
            RaceCarSnippet::new(config),
            Err(SnippetError::AttributeType { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_lap_length() {
        let config = RaceCarConfig {
            laps: vec![4.0, f64::INFINITY],
            json: true,
            ..RaceCarConfig::default()
        };

        let err = RaceCarSnippet::new(config).err().unwrap();
        assert_eq!(err.to_string(), "attribute 'laps' must be finite, got inf");
    }

    #[test]
    fn test_rejects_non_finite_fuel_from_extras() {
        let config = RaceCarConfig {
            extras: IndexMap::from([("fuel_remaining".to_string(), Value::Float(f64::NAN))]),
            ..RaceCarConfig::default()
        };

        assert!(matches!(
            RaceCarSnippet::new(config),
            Err(SnippetError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_json_refuses_fuel_that_overflowed() {
        let snippet = RaceCarSnippet::new(RaceCarConfig {
            fuel_remaining: -f64::MAX,
            laps: vec![f64::MAX],
            json: true,
            ..RaceCarConfig::default()
        })
        .unwrap();

        let mut out = Vec::new();
        let err = snippet.run(&mut out).unwrap_err();
        assert!(matches!(err, SnippetError::NonFinite { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_output_reads_back() {
        let snippet = RaceCarSnippet::new(RaceCarConfig {
            json: true,
            ..RaceCarConfig::default()
        })
        .unwrap();

        let json = run_to_string(&snippet);
        let car: RaceCar = serde_json::from_str(json.trim_end()).unwrap();
        assert_eq!(car.laps(), 3);
        assert_eq!(car.fuel_remaining(), 8.5);
    }
}
