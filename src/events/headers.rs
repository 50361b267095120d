//! Case-insensitive header map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request headers as delivered by the gateway.
///
/// Keys are stored as received. Lookups ignore ASCII case, since HTTP header
/// names are case-insensitive and the gateway does not guarantee lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    /// Returns the value of the first header whose name matches `name`
    /// ignoring ASCII case.
    pub fn get_ignore_case(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Replace the value of every header matching `name` ignoring ASCII case.
    pub fn redact(&mut self, name: &str, replacement: &str) {
        for (key, value) in self.0.iter_mut() {
            if key.eq_ignore_ascii_case(name) {
                *value = replacement.to_string();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
