//! Per-field encoding rules.

use std::collections::HashMap;

use serde_json::Value;

use crate::params::{is_falsy, stringify};

/// Field that is part of the record shape but never serialized.
pub const RESERVED_FIELD: &str = "_type";

/// Sort order implied when `sort` is absent from the query string.
pub const DEFAULT_SORT: &str = "date";

/// Fields carried as one pair per sequence element.
pub const MULTI_VALUE_FIELDS: [&str; 2] = ["tags", "predicted_entities"];

/// How a single field is carried into the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Never serialized.
    Drop,
    /// Truthy values become `1`.
    BooleanAsInt,
    /// One pair per sequence element; a truthy scalar counts as one element.
    MultiValue,
    /// Emitted unless the value is exactly the default string.
    DefaultSuppressed(String),
    /// Only the falsy form is serialized, as `0`.
    FalsyAsZero,
    /// `key=value` for any truthy value.
    Verbatim,
}

static VERBATIM: Strategy = Strategy::Verbatim;

impl Strategy {
    /// Values emitted for `value`, in order. Empty when the field is skipped.
    pub fn values(&self, value: &Value) -> Vec<String> {
        let falsy = is_falsy(value);
        match self {
            Strategy::Drop => Vec::new(),
            Strategy::FalsyAsZero => {
                if falsy {
                    vec!["0".to_string()]
                } else {
                    Vec::new()
                }
            }
            _ if falsy => Vec::new(),
            Strategy::BooleanAsInt => vec!["1".to_string()],
            Strategy::MultiValue => match value {
                Value::Array(items) => items.iter().map(stringify).collect(),
                other => vec![stringify(other)],
            },
            Strategy::DefaultSuppressed(default) => match value {
                Value::String(s) if s == default => Vec::new(),
                other => vec![stringify(other)],
            },
            Strategy::Verbatim => vec![stringify(value)],
        }
    }
}

/// Lookup from field name to [`Strategy`]. Unlisted fields are [`Strategy::Verbatim`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: HashMap<String, Strategy>,
}

impl RuleTable {
    /// Rules used by the Models Hub listing.
    pub fn standard() -> Self {
        let mut table = Self::empty()
            .with_rule(RESERVED_FIELD, Strategy::Drop)
            .with_rule("supported", Strategy::BooleanAsInt)
            .with_rule("sort", Strategy::DefaultSuppressed(DEFAULT_SORT.to_string()))
            .with_rule("recommended", Strategy::FalsyAsZero);
        for field in MULTI_VALUE_FIELDS {
            table = table.with_rule(field, Strategy::MultiValue);
        }
        table
    }

    /// A table where every field is verbatim.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn with_rule(mut self, field: impl Into<String>, strategy: Strategy) -> Self {
        self.rules.insert(field.into(), strategy);
        self
    }

    pub fn strategy_for(&self, field: &str) -> &Strategy {
        self.rules.get(field).unwrap_or(&VERBATIM)
    }

    /// Explicit rules, sorted by field name.
    pub fn rules(&self) -> Vec<(&str, &Strategy)> {
        let mut rules: Vec<_> = self.rules.iter().map(|(k, v)| (k.as_str(), v)).collect();
        rules.sort_by(|a, b| a.0.cmp(b.0));
        rules
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}
