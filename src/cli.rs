//! Command-line argument definitions for `retype`.
//!
//! Uses [`clap`] derive macros for argument parsing. Values that need
//! validation (format, pattern) are kept as text here and parsed while
//! building the [`Config`](crate::config::Config), so CLI and config-file
//! values fail the same way.

use clap::Parser;

/// Convert structured log record fields to typed values.
///
/// Reads records from stdin, applies type conversions and optional
/// timestamp re-derivation, and writes `[timestamp,{fields}]` JSON lines to
/// stdout.
#[derive(Debug, Default, Parser)]
#[command(name = "retype", version, about, long_about = None)]
pub struct Cli {
    /// Input format: none, ltsv, json or regexp (case-insensitive).
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Regular expression with named captures, used by the regexp format.
    #[arg(short = 'r', long)]
    pub regexp: Option<String>,

    /// Field that receives the raw line when the format is `none`.
    #[arg(short = 'n', long)]
    pub field_name: Option<String>,

    /// Type conversions, e.g. `status:integer,ok:bool,took:float`.
    ///
    /// Fragments without a type or with an unknown type are ignored.
    #[arg(short = 'C', long)]
    pub convert: Option<String>,

    /// Re-derive the record timestamp from the time key.
    #[arg(short = 'T', long, conflicts_with = "no_time_parse")]
    pub time_parse: bool,

    /// Keep the incoming record timestamp, even if the config file enables time parsing.
    #[arg(long)]
    pub no_time_parse: bool,

    /// Field holding the textual timestamp.
    #[arg(long)]
    pub time_key: Option<String>,

    /// Timestamp layout: `rfc3339` or a strftime-style format.
    #[arg(long)]
    pub time_format: Option<String>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Validate the configuration, print the effective settings and exit.
    #[arg(long)]
    pub check: bool,

    /// Log conversion failures and skipped fragments to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
