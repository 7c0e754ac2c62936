//! Input format selector.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RetypeError;

/// Which line decoder produced a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum FileFormat {
    /// Whole line kept as a single text field.
    #[default]
    None,
    /// Labeled tab-separated values.
    Ltsv,
    /// One JSON object per line.
    Json,
    /// Named captures of a regular expression.
    Regexp,
}

impl FileFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ltsv => "ltsv",
            Self::Json => "json",
            Self::Regexp => "regexp",
        }
    }
}

/// Case-insensitive; the empty string selects [`FileFormat::None`].
/// Surrounding whitespace is not trimmed.
impl FromStr for FileFormat {
    type Err = RetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ltsv" => Ok(Self::Ltsv),
            "json" => Ok(Self::Json),
            "regexp" => Ok(Self::Regexp),
            "" | "none" => Ok(Self::None),
            _ => Err(RetypeError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for FileFormat {
    type Error = RetypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
