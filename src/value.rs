//! Dynamically typed field values.
//!
//! A decoder hands over field values whose concrete type depends on the
//! input format, so the runtime type travels with the value as a tag.

use serde::Serialize;

/// A single field value as produced by a line decoder.
///
/// Serializes untagged, so `Int(42)` becomes `42` and `Text("a")` becomes `"a"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    /// Native (64-bit) integer.
    Int(i64),
    Int32(i32),
    Float(f64),
    Float32(f32),
    /// Nested objects, arrays and null.
    Structured(serde_json::Value),
}

impl FieldValue {
    /// Returns the text if this value is still textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 64-bit integer view of a numeric value, truncating floats toward zero.
    ///
    /// Returns `None` for anything that is not a number.
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate_to_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(i) => Some(i),
            Self::Int32(i) => Some(i64::from(i)),
            Self::Float(f) => Some(f as i64),
            Self::Float32(f) => Some(f as i64),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    Self::Structured(serde_json::Value::Number(n))
                }
            }
            other => Self::Structured(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
