// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::consts::{FUEL_PER_LENGTH_UNIT, MAX_LAPS};
use crate::errors::SnippetError;
use crate::observability::messages::oop::{FuelExhausted, LapCompleted};
use crate::observability::messages::StructuredLog;
use crate::value::Value;

const ENTITY: &str = "RaceCar";

const COLOR: &str = "color";
const FUEL_REMAINING: &str = "fuel_remaining";
const LAPS: &str = "laps";

/// A race car with three fixed attributes and any number of extra ones.
///
/// Extra attributes are kept in insertion order and looked up by name through
/// [`RaceCar::attr`]. Fixed attributes are reachable the same way, so callers
/// can treat every attribute uniformly.
///
/// # Example
/// ```
/// use indexmap::IndexMap;
/// use the_snippets::oop::RaceCar;
/// use the_snippets::value::Value;
///
/// let extras = IndexMap::from([("speed".to_string(), Value::Int(200))]);
/// let mut car = RaceCar::new("red", 10.0, extras).unwrap();
///
/// car.run_lap(4.0).unwrap();
///
/// assert_eq!(car.fuel_remaining(), 9.5);
/// assert_eq!(car.laps(), 1);
/// assert_eq!(car.attr("speed"), Some(Value::Int(200)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceCar {
    color: String,
    fuel_remaining: f64,
    #[serde(default)]
    laps: u64,
    #[serde(flatten)]
    extras: IndexMap<String, Value>,
}

impl RaceCar {
    /// Build a car with zero laps, then apply each extra attribute in order.
    ///
    /// An extra named like a fixed attribute overwrites it and has to match
    /// its type.
    pub fn new(
        color: impl Into<String>,
        fuel_remaining: f64,
        extras: IndexMap<String, Value>,
    ) -> Result<Self, SnippetError> {
        let mut car = Self {
            color: color.into(),
            fuel_remaining,
            laps: 0,
            extras: IndexMap::new(),
        };

        for (name, value) in extras {
            car.set_attr(&name, value)?;
        }

        Ok(car)
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn fuel_remaining(&self) -> f64 {
        self.fuel_remaining
    }

    pub fn laps(&self) -> u64 {
        self.laps
    }

    pub fn extras(&self) -> &IndexMap<String, Value> {
        &self.extras
    }

    /// Attribute names: the fixed ones first, then extras in insertion order.
    pub fn attr_names(&self) -> impl Iterator<Item = &str> {
        [COLOR, FUEL_REMAINING, LAPS]
            .into_iter()
            .chain(self.extras.keys().map(String::as_str))
    }

    /// Look up any attribute by name.
    pub fn attr(&self, name: &str) -> Option<Value> {
        match name {
            COLOR => Some(Value::from(self.color.as_str())),
            FUEL_REMAINING => Some(Value::Float(self.fuel_remaining)),
            LAPS => Some(Value::Int(i64::try_from(self.laps).unwrap_or(i64::MAX))),
            _ => self.extras.get(name).cloned(),
        }
    }

    /// Like [`RaceCar::attr`], but a missing attribute is an error.
    pub fn get_attr(&self, name: &str) -> Result<Value, SnippetError> {
        self.attr(name).ok_or_else(|| SnippetError::MissingAttribute {
            entity: ENTITY,
            name: name.to_string(),
        })
    }

    /// Set an attribute after construction.
    pub fn set_attr(&mut self, name: &str, value: Value) -> Result<(), SnippetError> {
        match name {
            COLOR => match value {
                Value::Str(color) => self.color = color,
                other => return Err(type_mismatch(name, "str", &other)),
            },
            FUEL_REMAINING => match value.as_f64() {
                Some(fuel) => self.fuel_remaining = fuel,
                None => return Err(type_mismatch(name, "int or float", &value)),
            },
            LAPS => match value.as_i64().and_then(|laps| u64::try_from(laps).ok()) {
                Some(laps) => self.laps = laps,
                None => return Err(type_mismatch(name, "non-negative int", &value)),
            },
            _ => {
                self.extras.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Burn `length * 0.125` fuel and count one more lap.
    ///
    /// Fuel is not checked; it can go negative. The only failure is a lap
    /// counter already at its ceiling, in which case nothing changes.
    pub fn run_lap(&mut self, length: f64) -> Result<(), SnippetError> {
        if self.laps >= MAX_LAPS {
            return Err(SnippetError::Overflow {
                expression: format!("{} + 1", LAPS),
            });
        }

        self.fuel_remaining -= length * FUEL_PER_LENGTH_UNIT;
        self.laps += 1;

        LapCompleted {
            length,
            laps: self.laps,
            fuel_remaining: self.fuel_remaining,
        }
        .log();

        if self.fuel_remaining < 0.0 {
            FuelExhausted {
                color: &self.color,
                fuel_remaining: self.fuel_remaining,
            }
            .log();
        }

        Ok(())
    }
}

fn type_mismatch(name: &str, expected: &'static str, found: &Value) -> SnippetError {
    SnippetError::AttributeType {
        name: name.to_string(),
        expected,
        found: found.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_car() -> RaceCar {
        RaceCar::new("red", 10.0, IndexMap::new()).unwrap()
    }

    #[test]
    fn test_new_car_has_no_laps() {
        let car = plain_car();
        assert_eq!(car.color(), "red");
        assert_eq!(car.fuel_remaining(), 10.0);
        assert_eq!(car.laps(), 0);
        assert!(car.extras().is_empty());
    }

    #[test]
    fn test_run_lap_burns_fuel_and_counts() {
        let mut car = plain_car();

        car.run_lap(4.0).unwrap();
        assert_eq!(car.fuel_remaining(), 9.5);
        assert_eq!(car.laps(), 1);

        car.run_lap(4.0).unwrap();
        car.run_lap(4.0).unwrap();
        assert_eq!(car.fuel_remaining(), 8.5);
        assert_eq!(car.laps(), 3);
    }

    #[test]
    fn test_fuel_can_go_negative() {
        let mut car = RaceCar::new("blue", 1.0, IndexMap::new()).unwrap();
        car.run_lap(16.0).unwrap();
        assert_eq!(car.fuel_remaining(), -1.0);
        car.run_lap(16.0).unwrap();
        assert_eq!(car.fuel_remaining(), -3.0);
        assert_eq!(car.laps(), 2);
    }

    #[test]
    fn test_extras_become_attributes() {
        let extras = IndexMap::from([
            ("speed".to_string(), Value::Int(200)),
            ("driver".to_string(), Value::from("Speed Racer")),
        ]);
        let car = RaceCar::new("red", 10.0, extras).unwrap();

        assert_eq!(car.attr("speed"), Some(Value::Int(200)));
        assert_eq!(car.attr("driver"), Some(Value::from("Speed Racer")));
        assert_eq!(car.attr("color"), Some(Value::from("red")));
        assert_eq!(car.attr("wings"), None);
        assert_eq!(
            car.attr_names().collect::<Vec<_>>(),
            vec!["color", "fuel_remaining", "laps", "speed", "driver"]
        );
    }

    #[test]
    fn test_missing_attribute_error() {
        let err = plain_car().get_attr("wings").unwrap_err();
        assert_eq!(err.to_string(), "'RaceCar' object has no attribute 'wings'");
    }

    #[test]
    fn test_extras_can_overwrite_fixed_attributes() {
        let extras = IndexMap::from([("laps".to_string(), Value::Int(7))]);
        let mut car = RaceCar::new("red", 10.0, extras).unwrap();
        assert_eq!(car.laps(), 7);

        car.run_lap(8.0).unwrap();
        assert_eq!(car.laps(), 8);
        assert_eq!(car.fuel_remaining(), 9.0);
    }

    #[test]
    fn test_set_attr_after_construction() {
        let mut car = plain_car();

        car.set_attr("speed", Value::Int(180)).unwrap();
        car.set_attr("speed", Value::Int(220)).unwrap();
        car.set_attr("fuel_remaining", Value::Int(3)).unwrap();
        car.set_attr("color", Value::from("green")).unwrap();

        assert_eq!(car.attr("speed"), Some(Value::Int(220)));
        assert_eq!(car.fuel_remaining(), 3.0);
        assert_eq!(car.color(), "green");
        assert_eq!(car.extras().len(), 1);
    }

    #[test]
    fn test_fixed_attributes_are_type_checked() {
        let mut car = plain_car();

        let err = car.set_attr("laps", Value::Int(-1)).unwrap_err();
        assert_eq!(err.to_string(), "attribute 'laps' expects non-negative int, got int");

        let err = car.set_attr("color", Value::Int(1)).unwrap_err();
        assert!(matches!(err, SnippetError::AttributeType { found: "int", .. }));

        let extras = IndexMap::from([("fuel_remaining".to_string(), Value::from("full"))]);
        assert!(RaceCar::new("red", 10.0, extras).is_err());
    }

    #[test]
    fn test_serializes_with_flattened_extras() {
        let extras = IndexMap::from([("speed".to_string(), Value::Int(200))]);
        let mut car = RaceCar::new("red", 10.0, extras).unwrap();
        car.run_lap(4.0).unwrap();

        let json = serde_json::to_string(&car).unwrap();
        assert_eq!(json, r#"{"color":"red","fuel_remaining":9.5,"laps":1,"speed":200}"#);

        let back: RaceCar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, car);
    }

    #[test]
    fn test_lap_counter_ceiling() {
        let extras = IndexMap::from([("laps".to_string(), Value::Int(i64::MAX - 1))]);
        let mut car = RaceCar::new("red", 10.0, extras).unwrap();

        car.run_lap(1.0).unwrap();
        assert_eq!(car.attr("laps"), Some(Value::Int(i64::MAX)));

        let err = car.run_lap(1.0).unwrap_err();
        assert_eq!(err.to_string(), "integer overflow evaluating laps + 1");
        assert_eq!(car.laps(), MAX_LAPS);
        assert_eq!(car.fuel_remaining(), 9.875);
    }

    #[test]
    fn test_laps_past_u32_range() {
        let extras = IndexMap::from([("laps".to_string(), Value::Int(i64::from(u32::MAX)))]);
        let mut car = RaceCar::new("red", 10.0, extras).unwrap();

        car.run_lap(1.0).unwrap();
        assert_eq!(car.laps(), u64::from(u32::MAX) + 1);
    }
}
