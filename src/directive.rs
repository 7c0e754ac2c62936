//! Type directive parsing.
//!
//! A directive is written as `field:type[,field:type]*` where `type` is one of
//! `bool`, `integer` or `float`. Parsing is a total function: fragments
//! without a `:` and fragments with an unknown type keyword are dropped, so the
//! resulting [`ConvertMap`] may hold fewer entries than the text names.
//!
//! ```
//! use retype::directive::ConvertMap;
//! use retype::convert::ConvertType;
//!
//! let map = ConvertMap::parse("status:integer,ok:bool,junk,size:bytes");
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.type_of("status"), Some(ConvertType::Integer));
//! assert!(map.type_of("size").is_none());
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::convert::{ConvertType, Converter};
use crate::record::Fields;
use crate::value::FieldValue;

/// Parsed conversion plan: field name → (target type, converter).
///
/// Type tag and converter are stored together, so every name with a type
/// also has its converter. Entries keep the order in which each name first
/// appeared in the directive text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct ConvertMap {
    entries: IndexMap<String, (ConvertType, Converter)>,
}

impl ConvertMap {
    /// Parse directive text. Never fails.
    pub fn parse(config: &str) -> Self {
        let mut entries = IndexMap::new();

        for subdef in config.split(',') {
            let Some((name, keyword)) = subdef.split_once(':') else {
                if !subdef.is_empty() {
                    tracing::debug!(fragment = subdef, "dropping directive without type");
                }
                continue;
            };
            let Some((kind, converter)) = ConvertType::from_keyword(keyword)
                .and_then(|kind| kind.converter().map(|conv| (kind, conv)))
            else {
                tracing::debug!(field = name, keyword, "dropping directive with unknown type");
                continue;
            };
            entries.insert(name.to_string(), (kind, converter));
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target type declared for `name`.
    pub fn type_of(&self, name: &str) -> Option<ConvertType> {
        self.entries.get(name).map(|&(kind, _)| kind)
    }

    /// Converter bound to `name`.
    pub fn converter_of(&self, name: &str) -> Option<Converter> {
        self.entries.get(name).map(|&(_, conv)| conv)
    }

    /// Iterate `(name, type, converter)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ConvertType, Converter)> {
        self.entries
            .iter()
            .map(|(name, &(kind, conv))| (name.as_str(), kind, conv))
    }

    /// Apply every entry to `fields` in place.
    ///
    /// - Text values are run through the converter; on failure they stay as is.
    /// - Numeric values of the wrong width are truncated to `i64` when the
    ///   target is [`ConvertType::Integer`].
    /// - Everything else, including missing fields, is left alone.
    pub fn convert_types(&self, fields: &mut Fields) {
        for (name, &(kind, converter)) in &self.entries {
            let Some(value) = fields.get_mut(name) else {
                continue;
            };

            let converted = match &*value {
                FieldValue::Text(text) => match converter.convert(text) {
                    Ok(v) => Some(v),
                    Err(err) => {
                        tracing::debug!(field = %name, error = %err, "conversion failed, keeping text");
                        None
                    }
                },
                FieldValue::Float(_) | FieldValue::Float32(_) | FieldValue::Int32(_)
                    if kind == ConvertType::Integer =>
                {
                    value.truncate_to_i64().map(FieldValue::Int)
                }
                _ => None,
            };

            if let Some(v) = converted {
                *value = v;
            }
        }
    }
}

impl From<String> for ConvertMap {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl FromStr for ConvertMap {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Renders back to directive text, e.g. `a:bool,b:integer`.
impl fmt::Display for ConvertMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, kind, _)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{name}:{kind}")?;
        }
        Ok(())
    }
}
