//! Stateless text-to-typed-value converters.
//!
//! Each [`Converter`] turns the textual form of a field into a typed
//! [`FieldValue`] or fails. Converters carry no state, so a single value can be
//! shared freely between records and threads.

use std::fmt;

use crate::error::ConvertError;
use crate::value::FieldValue;

/// Target type tag of a conversion directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConvertType {
    String,
    Integer,
    Float,
    Bool,
}

impl ConvertType {
    /// Map a directive keyword to its type tag.
    ///
    /// Only `bool`, `integer` and `float` are recognized; the text type has no
    /// keyword. Matching is exact.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "bool" => Some(Self::Bool),
            "integer" => Some(Self::Integer),
            "float" => Some(Self::Float),
            _ => None,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }

    /// The converter bound to this type, if it has one.
    pub const fn converter(self) -> Option<Converter> {
        match self {
            Self::String => None,
            Self::Integer => Some(Converter::Integer),
            Self::Float => Some(Converter::Float),
            Self::Bool => Some(Converter::Bool),
        }
    }
}

impl fmt::Display for ConvertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A primitive literal converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    Bool,
    Integer,
    Float,
}

impl Converter {
    /// Convert `text` into a typed value.
    pub fn convert(self, text: &str) -> Result<FieldValue, ConvertError> {
        match self {
            Self::Bool => parse_bool(text).map(FieldValue::Bool),
            Self::Integer => Ok(FieldValue::Int(text.parse::<i64>()?)),
            Self::Float => parse_float(text).map(FieldValue::Float),
        }
    }
}

/// Parse a decimal or exponential literal. Finite literals whose magnitude
/// overflows `f64` are rejected; only explicit `inf`/`infinity` spellings may
/// produce an infinite value.
fn parse_float(text: &str) -> Result<f64, ConvertError> {
    let f = text.parse::<f64>()?;
    if f.is_infinite() {
        let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
        if !unsigned.eq_ignore_ascii_case("inf") && !unsigned.eq_ignore_ascii_case("infinity") {
            return Err(ConvertError::FloatRange(text.to_string()));
        }
    }
    Ok(f)
}

/// Parse the usual boolean spellings: `1`, `t`, `true` and `0`, `f`, `false`
/// in lower, upper and title case.
fn parse_bool(text: &str) -> Result<bool, ConvertError> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ConvertError::Bool(text.to_string())),
    }
}
