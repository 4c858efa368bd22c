// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Dynamically-typed values.
//!
//! [`Value`] is the variant type carried by open-ended extension attributes
//! and by anything that has to be rendered through [`AsciiRepr`]. It
//! deserializes untagged, so plain YAML/JSON scalars and sequences map onto
//! it directly:
//!
//! ```rust
//! use the_snippets::value::Value;
//!
//! let speed: Value = serde_yaml::from_str("200").unwrap();
//! assert_eq!(speed, Value::Int(200));
//!
//! let tags: Value = serde_yaml::from_str("[fast, 1.5, ~]").unwrap();
//! assert_eq!(
//!     tags,
//!     Value::List(vec![Value::from("fast"), Value::Float(1.5), Value::None])
//! );
//! ```

mod render;

use serde::{Deserialize, Serialize};

pub use render::AsciiRepr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

impl Value {
    /// Name of the value's type, as reported in attribute type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// Numeric view of the value; ints widen to floats, everything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization_picks_narrowest_type() {
        let values: Vec<Value> = serde_yaml::from_str("[true, 3, 3.5, hello, null]").unwrap();
        assert_eq!(
            values,
            vec![
                Value::Bool(true),
                Value::Int(3),
                Value::Float(3.5),
                Value::Str("hello".to_string()),
                Value::None,
            ]
        );
    }

    #[test]
    fn test_serialize_to_json() {
        let value = Value::from(vec![Value::from(1), Value::from("a"), Value::None]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"[1,"a",null]"#);
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(Value::Int(4).as_f64(), Some(4.0));
        assert_eq!(Value::Float(4.5).as_i64(), None);
        assert_eq!(Value::from("x").as_f64(), None);
        assert_eq!(Value::from(Some("x")).as_str(), Some("x"));
        assert_eq!(Value::from(None::<i32>), Value::None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::None.type_name(), "NoneType");
        assert_eq!(Value::from(2u8).type_name(), "int");
        assert_eq!(Value::from(vec![1, 2]).type_name(), "list");
    }
}
