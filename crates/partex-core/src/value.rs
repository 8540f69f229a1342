//! Parameter values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The value of a parameter: either a number or free text.
///
/// Numbers keep the representation they were read with, so `20000.0` stays
/// `20000.0` and `10000` stays `10000` when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(Number),
    Text(String),
}

impl ParamValue {
    /// Whether this value is numeric (and therefore typeset in math mode).
    pub fn is_numeric(&self) -> bool {
        matches!(self, ParamValue::Number(_))
    }

    /// The numeric value as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => n.as_f64(),
            ParamValue::Text(_) => None,
        }
    }

    /// The textual value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{n}"),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Number(v.into())
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        ParamValue::Number(v.into())
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Number(v.into())
    }
}

/// Non-finite floats have no JSON number form and fall back to text.
impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        match Number::from_f64(v) {
            Some(n) => ParamValue::Number(n),
            None => ParamValue::Text(v.to_string()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}
