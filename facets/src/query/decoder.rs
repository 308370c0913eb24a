//! Query string back to a filter record.

use serde_json::Value;

use crate::params::FilterParams;

use super::rules::{RuleTable, Strategy};

/// Parses query strings produced by [`super::QueryEncoder`] with the same rules.
#[derive(Debug, Clone, Default)]
pub struct QueryDecoder {
    rules: RuleTable,
}

impl QueryDecoder {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// Decode `?key=value&...` (the `?` is optional).
    ///
    /// Multi-valued fields collect into sequences, integer-coded flags
    /// become booleans, everything else keeps its last string value.
    pub fn decode(&self, query: &str) -> FilterParams {
        let query = query.trim();
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = FilterParams::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match self.rules.strategy_for(&key) {
                Strategy::Drop => {
                    tracing::trace!(field = %key, "reserved field ignored");
                }
                Strategy::MultiValue => params.append(key.into_owned(), value),
                Strategy::BooleanAsInt | Strategy::FalsyAsZero => {
                    params.set(key.into_owned(), Value::Bool(value != "0"));
                }
                Strategy::DefaultSuppressed(_) | Strategy::Verbatim => {
                    params.set(key.into_owned(), value);
                }
            }
        }

        params
    }
}

/// Decode with the standard rules.
pub fn decode(query: &str) -> FilterParams {
    QueryDecoder::default().decode(query)
}
