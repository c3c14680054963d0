//! In-memory connector configuration mapping.
//!
//! The host hands each connector factory a flat string-to-string mapping at
//! instantiation time; this core never reads configuration files itself.
//! Keys iterate in sorted order so diagnostics and serialized forms are
//! stable across runs.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConnectorError, ConnectorResult};

/// Flat configuration mapping for one connector instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectorConfig {
    properties: BTreeMap<String, String>,
}

impl ConnectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property, returning None when absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|v| v.as_str())
    }

    /// Look up a property that must be present.
    pub fn require(&self, key: &str) -> ConnectorResult<&str> {
        self.get(key).ok_or_else(|| {
            ConnectorError::invalid_configuration(format!("missing required property '{}'", key))
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConnectorConfig {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { properties: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_reports_missing_key() {
        let cfg: ConnectorConfig =
            [("hive.metastore.uri", "thrift://meta:9083")].into_iter().collect();
        assert_eq!(cfg.require("hive.metastore.uri").unwrap(), "thrift://meta:9083");
        let err = cfg.require("hive.config.resources").unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("hive.config.resources"));
    }

    #[test]
    fn iterates_in_key_order() {
        let cfg: ConnectorConfig = [("b", "2"), ("a", "1")].into_iter().collect();
        let keys: Vec<&str> = cfg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn serde_round_trip_is_transparent() {
        let cfg: ConnectorConfig = [("hive.metastore.uri", "thrift://meta:9083")].into_iter().collect();
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(text, r#"{"hive.metastore.uri":"thrift://meta:9083"}"#);
        let back: ConnectorConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }
}
