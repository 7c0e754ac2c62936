//! Compiled pattern for the pattern-capture decoder.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use regex::Regex;
use serde::Deserialize;

use crate::error::RetypeError;

/// A regular expression compiled once at configuration load.
///
/// Named capture groups become field names in the decoder that consumes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(text: &str) -> Result<Self, RetypeError> {
        Ok(Self(Regex::new(text)?))
    }

    /// Names of the named capture groups, in group order.
    pub fn field_names(&self) -> Vec<&str> {
        self.0.capture_names().flatten().collect()
    }
}

impl Deref for Pattern {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.0
    }
}

impl FromStr for Pattern {
    type Err = RetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Pattern {
    type Error = RetypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
