//! Per-record mutation: type conversion and timestamp re-derivation.

use crate::directive::ConvertMap;
use crate::record::Record;
use crate::timestamp::TimeConverter;

/// Default field used as the timestamp source.
pub const DEFAULT_TIME_KEY: &str = "time";

/// Applies a [`ConvertMap`] and, optionally, timestamp re-derivation to records.
///
/// Built once from configuration and then shared read-only; [`modify`](Self::modify)
/// keeps no state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordModifier {
    convert_map: ConvertMap,
    time_parse: bool,
    time_key: String,
    time_converter: TimeConverter,
}

impl Default for RecordModifier {
    fn default() -> Self {
        Self::new(ConvertMap::default())
    }
}

impl RecordModifier {
    /// A modifier that converts field types only.
    pub fn new(convert_map: ConvertMap) -> Self {
        Self {
            convert_map,
            time_parse: false,
            time_key: DEFAULT_TIME_KEY.to_string(),
            time_converter: TimeConverter::default(),
        }
    }

    /// Enable timestamp re-derivation from `time_key` using `time_converter`.
    #[must_use]
    pub fn with_time_parse(mut self, time_key: impl Into<String>, time_converter: TimeConverter) -> Self {
        self.time_parse = true;
        self.time_key = time_key.into();
        self.time_converter = time_converter;
        self
    }

    pub fn convert_map(&self) -> &ConvertMap {
        &self.convert_map
    }

    pub fn time_parse(&self) -> bool {
        self.time_parse
    }

    pub fn time_key(&self) -> &str {
        &self.time_key
    }

    pub fn time_converter(&self) -> &TimeConverter {
        &self.time_converter
    }

    /// Mutate `record` in place. Never fails; values that cannot be converted
    /// are left unchanged.
    pub fn modify(&self, record: &mut Record) {
        if !self.convert_map.is_empty() {
            self.convert_map.convert_types(&mut record.fields);
        }
        if !self.time_parse {
            return;
        }

        let Some(text) = record.fields.get(&self.time_key).and_then(|v| v.as_text()) else {
            return;
        };
        match self.time_converter.convert_epoch_seconds(text) {
            Ok(ts) => record.timestamp = ts,
            Err(err) => {
                tracing::debug!(
                    field = %self.time_key,
                    layout = %self.time_converter,
                    error = %err,
                    "time parse failed, keeping record timestamp"
                );
            }
        }
    }
}
