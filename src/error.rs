//! Error types for `retype`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur while loading configuration or moving lines.
///
/// Maps to exit codes via [`exit_code`](Self::exit_code):
/// [`Io`](Self::Io) → exit 2, everything else → exit 1.
#[derive(Debug, Error)]
pub enum RetypeError {
    /// Configuration error (unreadable config file, inconsistent settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown input format selector.
    #[error("invalid format {0}")]
    InvalidFormat(String),

    /// Regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization error while writing a record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RetypeError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 2,
            _ => 1,
        }
    }
}

/// Failure of a single converter on a single value.
///
/// Never escapes [`RecordModifier::modify`](crate::modifier::RecordModifier::modify);
/// the affected field is left as it was.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid boolean literal {0:?}")]
    Bool(String),

    #[error("invalid integer literal: {0}")]
    Int(#[from] std::num::ParseIntError),

    #[error("invalid float literal: {0}")]
    Float(#[from] std::num::ParseFloatError),

    #[error("float literal {0:?} out of range")]
    FloatRange(String),

    #[error("time does not match layout: {0}")]
    Time(#[from] jiff::Error),
}
