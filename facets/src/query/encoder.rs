//! Filter record to query string.

use crate::params::FilterParams;

use super::rules::RuleTable;

/// Serializes filter records with a [`RuleTable`].
#[derive(Debug, Clone, Default)]
pub struct QueryEncoder {
    rules: RuleTable,
}

impl QueryEncoder {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Unencoded `(key, value)` pairs in output order.
    pub fn pairs<'a>(&self, params: &'a FilterParams) -> Vec<(&'a str, String)> {
        let mut pairs = Vec::new();
        for (key, value) in params.iter() {
            let strategy = self.rules.strategy_for(key);
            let values = strategy.values(value);
            if values.is_empty() {
                tracing::trace!(field = key, ?strategy, "field skipped");
            }
            pairs.extend(values.into_iter().map(|v| (key, v)));
        }
        pairs
    }

    /// Encode a record as `""` or `?key=value&...`.
    pub fn encode(&self, params: &FilterParams) -> String {
        let pairs = self.pairs(params);
        if pairs.is_empty() {
            return String::new();
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        let query = format!("?{}", serializer.finish());
        tracing::debug!(pairs = pairs.len(), %query, "encoded filter params");
        query
    }
}

/// Encode with the standard rules.
pub fn encode(params: &FilterParams) -> String {
    QueryEncoder::default().encode(params)
}
