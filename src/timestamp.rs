//! Layout-driven timestamp parsing.
//!
//! A [`TimeConverter`] is bound to one layout for its whole life. The layout
//! is either the keyword [`RFC3339`] or a `strftime`-style format understood
//! by [`jiff::fmt::strtime`]. Layouts without an offset directive are read as
//! UTC civil time.

use std::fmt;

use crate::error::ConvertError;

/// Layout keyword selecting RFC 3339 / ISO 8601 instants (`Z` or `±HH:MM`).
pub const RFC3339: &str = "rfc3339";

/// Parses text into an absolute point in time using a fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeConverter {
    layout: String,
}

impl Default for TimeConverter {
    fn default() -> Self {
        Self::new(RFC3339)
    }
}

impl TimeConverter {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
        }
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Parse `text` against the layout.
    ///
    /// Fails if the text does not match the layout exactly, including
    /// trailing input.
    pub fn convert(&self, text: &str) -> Result<jiff::Timestamp, ConvertError> {
        if self.layout.eq_ignore_ascii_case(RFC3339) {
            return Ok(text.parse::<jiff::Timestamp>()?);
        }

        // Layouts carrying an offset resolve directly to an instant
        if let Ok(ts) = jiff::Timestamp::strptime(&self.layout, text) {
            return Ok(ts);
        }

        let dt = jiff::civil::DateTime::strptime(&self.layout, text)?;
        Ok(dt.to_zoned(jiff::tz::TimeZone::UTC)?.timestamp())
    }

    /// Parse `text` and reduce it to whole epoch seconds, rounding down.
    pub fn convert_epoch_seconds(&self, text: &str) -> Result<i64, ConvertError> {
        self.convert(text).map(floor_second)
    }
}

/// `as_second` truncates toward zero; instants before the epoch with a
/// fractional part carry a negative subsecond and belong to the earlier second.
fn floor_second(ts: jiff::Timestamp) -> i64 {
    let secs = ts.as_second();
    if ts.subsec_nanosecond() < 0 { secs - 1 } else { secs }
}

impl fmt::Display for TimeConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout)
    }
}
