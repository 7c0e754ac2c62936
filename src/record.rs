//! The record handed to the engine by the surrounding agent.

use std::collections::BTreeMap;

use crate::value::FieldValue;

/// Named field set of a record, ordered alphabetically.
pub type Fields = BTreeMap<String, FieldValue>;

/// One structured log event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Canonical timestamp in Unix epoch seconds.
    pub timestamp: i64,
    pub fields: Fields,
}

impl Record {
    pub fn new(timestamp: i64, fields: Fields) -> Self {
        Self { timestamp, fields }
    }

    /// Build a record from a JSON object, keeping every member as a field.
    pub fn from_json_map(timestamp: i64, map: serde_json::Map<String, serde_json::Value>) -> Self {
        let fields = map
            .into_iter()
            .map(|(key, value)| (key, FieldValue::from(value)))
            .collect();
        Self { timestamp, fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
