//! `retype` — coerce structured log record fields into typed values.
//!
//! This library is the record-modification core of a log-shipping agent. A
//! compact directive such as `status:integer,ok:bool,took:float` is parsed
//! into a [`ConvertMap`]; a [`RecordModifier`] then applies it to every
//! [`Record`] in place and, if enabled, re-derives the record timestamp from a
//! textual field using a [`TimeConverter`].
//!
//! Load-time settings (input [`FileFormat`], decoder [`Pattern`]) are strict
//! and return errors. Per-record work never fails: a value that cannot be
//! converted is left as it was.
//!
//! # Example
//!
//! ```
//! use retype::{ConvertMap, FieldValue, Record, RecordModifier, TimeConverter};
//!
//! let modifier = RecordModifier::new(ConvertMap::parse("code:integer,ok:bool"))
//!     .with_time_parse("time", TimeConverter::new("%Y-%m-%dT%H:%M:%SZ"));
//!
//! let mut record = Record::default();
//! record.fields.insert("code".into(), "200".into());
//! record.fields.insert("ok".into(), "true".into());
//! record.fields.insert("time".into(), "2023-01-02T03:04:05Z".into());
//!
//! modifier.modify(&mut record);
//! assert_eq!(record.fields["code"], FieldValue::Int(200));
//! assert_eq!(record.fields["ok"], FieldValue::Bool(true));
//! assert_eq!(record.timestamp, 1_672_628_645);
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod directive;
pub mod error;
pub mod format;
pub mod formatter;
pub mod modifier;
pub mod parser;
pub mod pattern;
pub mod record;
pub mod timestamp;
pub mod value;

// Re-export primary API types for convenience.
pub use config::Config;
pub use convert::{ConvertType, Converter};
pub use directive::ConvertMap;
pub use error::{ConvertError, RetypeError};
pub use format::FileFormat;
pub use formatter::format_record;
pub use modifier::RecordModifier;
pub use parser::LineParser;
pub use pattern::Pattern;
pub use record::{Fields, Record};
pub use timestamp::TimeConverter;
pub use value::FieldValue;
