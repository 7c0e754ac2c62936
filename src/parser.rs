//! Turns stdin lines into [`Record`]s for the `retype` binary.
//!
//! Only the formats whose records arrive already structured are handled
//! here:
//! - `none`: the whole line becomes one text field.
//! - `json`: a JSON object, or a forward-style `[time, {object}]` pair.
//!
//! LTSV and regexp lines need their own decoders upstream, so building a
//! [`LineParser`] for them is a configuration error.

use crate::config::Config;
use crate::error::RetypeError;
use crate::format::FileFormat;
use crate::record::{Fields, Record};
use crate::value::FieldValue;

/// Line-to-record decoder for one configured format.
#[derive(Debug, Clone)]
pub struct LineParser {
    format: FileFormat,
    field_name: String,
}

impl LineParser {
    pub fn new(config: &Config) -> Result<Self, RetypeError> {
        match config.format {
            FileFormat::None | FileFormat::Json => Ok(Self {
                format: config.format,
                field_name: config.field_name.clone(),
            }),
            FileFormat::Ltsv | FileFormat::Regexp => Err(RetypeError::Config(format!(
                "format `{}` must be decoded upstream; feed records to retype as JSON lines",
                config.format
            ))),
        }
    }

    /// Parse a single line. Empty lines yield `None`.
    ///
    /// `now` is used as the timestamp when the line does not carry one.
    pub fn parse(&self, line: &str, now: i64) -> Option<Record> {
        if line.trim().is_empty() {
            return None;
        }

        match self.format {
            FileFormat::Json => Some(self.parse_json(line, now).unwrap_or_else(|| {
                tracing::warn!(line, "not a JSON record, keeping the raw line");
                self.raw_record(line, now)
            })),
            _ => Some(self.raw_record(line, now)),
        }
    }

    fn raw_record(&self, line: &str, now: i64) -> Record {
        let mut fields = Fields::new();
        fields.insert(self.field_name.clone(), FieldValue::Text(line.to_string()));
        Record::new(now, fields)
    }

    /// Accepts `{...}` or `[time, {...}]`; arrays of any other shape are rejected.
    fn parse_json(&self, line: &str, now: i64) -> Option<Record> {
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).ok()?;

        match parsed {
            serde_json::Value::Object(map) => Some(Record::from_json_map(now, map)),
            serde_json::Value::Array(items) => {
                let [time, serde_json::Value::Object(map)] = <[serde_json::Value; 2]>::try_from(items).ok()? else {
                    return None;
                };
                Some(Record::from_json_map(epoch_seconds(&time)?, map))
            }
            _ => None,
        }
    }
}

/// Epoch seconds from an integer or floating-point JSON number.
#[allow(clippy::cast_possible_truncation)]
fn epoch_seconds(value: &serde_json::Value) -> Option<i64> {
    let n = value.as_number()?;
    n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
}
