//! Store view configuration shared by the storefront and the dev backend.

use serde::{Deserialize, Serialize};

/// Configuration of a single store view as exposed by the `storeConfig` and
/// `availableStores` GraphQL fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store_code: String,
    pub store_name: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub default_display_currency_code: String,
    #[serde(default)]
    pub secure_base_media_url: String,
    #[serde(default)]
    pub is_default_store: bool,
}

impl StoreConfig {
    pub fn new(store_code: impl Into<String>, store_name: impl Into<String>) -> Self {
        Self {
            store_code: store_code.into(),
            store_name: store_name.into(),
            locale: String::new(),
            default_display_currency_code: String::new(),
            secure_base_media_url: String::new(),
            is_default_store: false,
        }
    }
}

/// Store code -> store descriptor, iterated in insertion order.
///
/// Re-inserting a known code replaces its descriptor but keeps the position
/// it was first inserted at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableStores {
    entries: Vec<StoreConfig>,
}

impl AvailableStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, store: StoreConfig) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.store_code == store.store_code)
        {
            Some(existing) => *existing = store,
            None => self.entries.push(store),
        }
    }

    pub fn get(&self, store_code: &str) -> Option<&StoreConfig> {
        self.entries.iter().find(|s| s.store_code == store_code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(store_code, descriptor)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoreConfig)> {
        self.entries.iter().map(|s| (s.store_code.as_str(), s))
    }
}

impl FromIterator<StoreConfig> for AvailableStores {
    fn from_iter<I: IntoIterator<Item = StoreConfig>>(iter: I) -> Self {
        let mut stores = AvailableStores::new();
        for store in iter {
            stores.insert(store);
        }
        stores
    }
}

impl From<Vec<StoreConfig>> for AvailableStores {
    fn from(stores: Vec<StoreConfig>) -> Self {
        stores.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let stores: AvailableStores = vec![
            StoreConfig::new("outlet", "Outlet"),
            StoreConfig::new("default", "Main"),
            StoreConfig::new("fr", "French"),
        ]
        .into();

        let codes: Vec<&str> = stores.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["outlet", "default", "fr"]);
    }

    #[test]
    fn test_duplicate_code_replaces_in_place() {
        let stores: AvailableStores = vec![
            StoreConfig::new("1", "Main"),
            StoreConfig::new("2", "Outlet"),
            StoreConfig::new("1", "Main (renamed)"),
        ]
        .into();

        assert_eq!(stores.len(), 2);
        let names: Vec<&str> = stores.iter().map(|(_, s)| s.store_name.as_str()).collect();
        assert_eq!(names, vec!["Main (renamed)", "Outlet"]);
    }

    #[test]
    fn test_lookup_by_code() {
        let stores: AvailableStores =
            vec![StoreConfig::new("main", "Main"), StoreConfig::new("outlet", "Outlet")].into();

        assert_eq!(stores.get("outlet").map(|s| s.store_name.as_str()), Some("Outlet"));
        assert!(stores.get("missing").is_none());
    }

    #[test]
    fn test_decode_with_optional_fields_missing() {
        let store: StoreConfig =
            serde_json::from_str(r#"{"store_code":"default","store_name":"Main"}"#).unwrap();
        assert_eq!(store.store_code, "default");
        assert!(!store.is_default_store);
        assert!(store.locale.is_empty());
    }
}
