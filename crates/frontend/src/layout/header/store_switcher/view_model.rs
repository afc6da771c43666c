//! Render model of the store switcher, independent of Leptos.

use contracts::shared::store_config::AvailableStores;

use super::controller::StoreSwitcherController;
use crate::shared::classify::ClassMap;

pub const ROOT: &str = "root";
pub const ROOT_MOBILE: &str = "root_mobile";
pub const STORE_SWITCHER_CONTAINER: &str = "storeSwitcherContainer";

pub fn default_classes() -> ClassMap {
    ClassMap::from_pairs([
        (ROOT, "store-switcher"),
        (ROOT_MOBILE, "store-switcher store-switcher--mobile"),
        (STORE_SWITCHER_CONTAINER, "store-switcher__container"),
    ])
}

/// Caller overrides for the switcher's classes. `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSwitcherClasses {
    pub root: Option<String>,
    pub root_mobile: Option<String>,
    pub store_switcher_container: Option<String>,
}

impl StoreSwitcherClasses {
    pub fn to_class_map(&self) -> ClassMap {
        let mut map = ClassMap::new();
        let keyed = [
            (ROOT, &self.root),
            (ROOT_MOBILE, &self.root_mobile),
            (STORE_SWITCHER_CONTAINER, &self.store_switcher_container),
        ];
        for (key, class) in keyed {
            if let Some(class) = class {
                map.set(key, class.clone());
            }
        }
        map
    }
}

/// One selectable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreItem {
    pub store_code: String,
    pub label: String,
}

impl StoreItem {
    pub fn activate(&self, controller: &dyn StoreSwitcherController) {
        log::debug!("store switcher: selected store '{}'", self.store_code);
        controller.handle_switch_store(&self.store_code);
    }
}

/// Wrapper holding the store items; only present with two or more stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreToggle {
    pub class: String,
    pub items: Vec<StoreItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSwitcherView {
    pub root_class: String,
    pub toggle: Option<StoreToggle>,
}

pub fn has_multiple_stores(stores: &AvailableStores) -> bool {
    stores.len() > 1
}

impl StoreSwitcherView {
    /// `classes` must already be merged with [`default_classes`].
    pub fn build(mobile_view: bool, classes: &ClassMap, stores: &AvailableStores) -> Self {
        let root_class = if mobile_view {
            classes.class(ROOT_MOBILE)
        } else {
            classes.class(ROOT)
        };

        let toggle = has_multiple_stores(stores).then(|| StoreToggle {
            class: classes.class(STORE_SWITCHER_CONTAINER).to_string(),
            items: stores
                .iter()
                .map(|(code, store)| StoreItem {
                    store_code: code.to_string(),
                    label: store.store_name.clone(),
                })
                .collect(),
        });

        Self {
            root_class: root_class.to_string(),
            toggle,
        }
    }

    pub fn items(&self) -> &[StoreItem] {
        self.toggle.as_ref().map(|t| t.items.as_slice()).unwrap_or_default()
    }
}
