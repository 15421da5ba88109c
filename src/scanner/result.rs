//! Scan result types
//!
//! One tagged value per match, carrying exactly the variant that the
//! matched option declares.

use serde::Serialize;
use std::fmt;

/// Typed value produced by a matched option
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum OptionValue {
    /// Argument-less option, or optional argument omitted
    #[default]
    None,
    /// Boolean option; `false` when given as `--no-<name>`
    Bool(bool),
    /// Integer argument
    Integer(i64),
    /// String argument
    String(String),
    /// Floating-point argument
    Double(f64),
}

impl OptionValue {
    /// Boolean value, if this is a boolean option
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value, if any
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// String value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Floating-point value, if any
    pub fn as_double(&self) -> Option<f64> {
        match self {
            OptionValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Take ownership of the string value, if any
    pub fn into_string(self) -> Option<String> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// True if no value was produced
    pub fn is_none(&self) -> bool {
        matches!(self, OptionValue::None)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::None => write!(f, "-"),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Integer(i) => write!(f, "{}", i),
            OptionValue::String(s) => write!(f, "\"{}\"", s),
            OptionValue::Double(d) => write!(f, "{}", d),
        }
    }
}

/// A successfully matched option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionMatch {
    /// Identifier of the matched descriptor
    pub id: u32,
    /// Typed value
    pub value: OptionValue,
    /// True when an ALLOW_DISABLE option was given as `--no-<name>`
    pub disabled: bool,
}
