//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/retype/config.toml` or `$XDG_CONFIG_HOME/retype/config.toml`)
//! 3. Built-in defaults
//!
//! Format, pattern and TOML errors are reported here, before any record is
//! read. The conversion directive itself never fails to load.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::directive::ConvertMap;
use crate::error::RetypeError;
use crate::format::FileFormat;
use crate::modifier::{DEFAULT_TIME_KEY, RecordModifier};
use crate::pattern::Pattern;
use crate::timestamp::{RFC3339, TimeConverter};

/// Field that receives the raw line for [`FileFormat::None`].
pub const DEFAULT_FIELD_NAME: &str = "message";

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Active line decoder.
    pub format: FileFormat,
    /// Pattern for the regexp decoder.
    pub pattern: Option<Pattern>,
    /// Field name for raw lines.
    pub field_name: String,
    /// Type conversions applied to every record.
    pub convert: ConvertMap,
    /// Whether to re-derive the record timestamp from `time_key`.
    pub time_parse: bool,
    pub time_key: String,
    /// Layout for `time_key` values (`rfc3339` or strftime-style).
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: FileFormat::None,
            pattern: None,
            field_name: DEFAULT_FIELD_NAME.to_string(),
            convert: ConvertMap::default(),
            time_parse: false,
            time_key: DEFAULT_TIME_KEY.to_string(),
            time_format: RFC3339.to_string(),
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, RetypeError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        } else if cli.config.is_some() {
            return Err(RetypeError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        if let Some(ref format) = cli.format {
            config.format = format.parse()?;
        }
        if let Some(ref pattern) = cli.regexp {
            config.pattern = Some(pattern.parse()?);
        }
        if let Some(ref name) = cli.field_name {
            config.field_name.clone_from(name);
        }
        if let Some(ref convert) = cli.convert {
            config.convert = ConvertMap::parse(convert);
        }
        if cli.time_parse {
            config.time_parse = true;
        } else if cli.no_time_parse {
            config.time_parse = false;
        }
        if let Some(ref key) = cli.time_key {
            config.time_key.clone_from(key);
        }
        if let Some(ref layout) = cli.time_format {
            config.time_format.clone_from(layout);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<(), RetypeError> {
        if self.format == FileFormat::Regexp && self.pattern.is_none() {
            return Err(RetypeError::Config(
                "format `regexp` requires a pattern (--regexp or `regexp` in the config file)"
                    .to_string(),
            ));
        }
        if self.time_parse && self.time_key.is_empty() {
            return Err(RetypeError::Config(
                "time parsing is enabled but the time key is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the record modifier described by this configuration.
    pub fn modifier(&self) -> RecordModifier {
        let modifier = RecordModifier::new(self.convert.clone());
        if self.time_parse {
            modifier.with_time_parse(
                self.time_key.clone(),
                TimeConverter::new(self.time_format.clone()),
            )
        } else {
            modifier
        }
    }

    /// Human-readable listing of the effective settings, one per line.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "format: {}", self.format);
        match self.pattern {
            Some(ref pattern) => {
                let _ = writeln!(out, "regexp: {pattern}");
                let _ = writeln!(out, "captures: {}", pattern.field_names().join(","));
            }
            None => {
                let _ = writeln!(out, "regexp: -");
            }
        }
        let _ = writeln!(out, "field_name: {}", self.field_name);
        let _ = writeln!(out, "convert: {}", self.convert);
        let _ = writeln!(out, "time_parse: {}", self.time_parse);
        let _ = writeln!(out, "time_key: {}", self.time_key);
        let _ = write!(out, "time_format: {}", self.time_format);
        out
    }

    /// Default config file path: `$XDG_CONFIG_HOME/retype/config.toml` or `~/.config/retype/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("retype").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("retype")
                .join("config.toml")
        } else {
            PathBuf::from(".config/retype/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(format) = file.format {
            self.format = format;
        }
        if file.regexp.is_some() {
            self.pattern = file.regexp;
        }
        if let Some(name) = file.field_name {
            self.field_name = name;
        }
        if let Some(convert) = file.convert {
            self.convert = convert;
        }
        if let Some(time_parse) = file.time_parse {
            self.time_parse = time_parse;
        }
        if let Some(key) = file.time_key {
            self.time_key = key;
        }
        if let Some(layout) = file.time_format {
            self.time_format = layout;
        }
    }
}

/// Config file structure (TOML deserialization).
///
/// `format` and `regexp` are parsed while deserializing, so a bad value
/// surfaces as a TOML error pointing at the offending key.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    format: Option<FileFormat>,
    regexp: Option<Pattern>,
    field_name: Option<String>,
    convert: Option<ConvertMap>,
    time_parse: Option<bool>,
    time_key: Option<String>,
    time_format: Option<String>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, RetypeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RetypeError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
