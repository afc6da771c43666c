//! Class name resolution.
//!
//! Components declare a map of default classes keyed by a logical name
//! (`root`, `root_mobile`, ...). Callers can override any subset of keys;
//! keys they leave out fall back to the defaults.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap(BTreeMap<String, String>);

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn set(&mut self, key: impl Into<String>, class: impl Into<String>) {
        self.0.insert(key.into(), class.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Class for `key`, or an empty string when neither defaults nor
    /// overrides define it.
    pub fn class(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Merge `overrides` onto `defaults`; an override wins for its key.
    pub fn merge(defaults: &ClassMap, overrides: Option<&ClassMap>) -> ClassMap {
        let mut merged = defaults.clone();
        if let Some(overrides) = overrides {
            for (key, class) in &overrides.0 {
                merged.0.insert(key.clone(), class.clone());
            }
        }
        merged
    }
}
