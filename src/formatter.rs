//! Output formatter for modified records.
//!
//! Each record is written as a forward-style JSON entry,
//! `[timestamp,{field:value,...}]`, with fields in alphabetical order and
//! typed values rendered as JSON booleans and numbers.

use crate::error::RetypeError;
use crate::record::Record;

/// Serialize `record` into `out`, replacing its contents.
pub fn format_record(record: &Record, out: &mut String) -> Result<(), RetypeError> {
    out.clear();
    out.push_str(&serde_json::to_string(&(record.timestamp, &record.fields))?);
    Ok(())
}
