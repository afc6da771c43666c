//! Capability the store switcher delegates to.

use std::sync::Arc;

use contracts::shared::graphql::{
    GET_AVAILABLE_STORES_CONFIG_DATA, GET_AVAILABLE_STORES_CONFIG_DATA_OPERATION,
};
use contracts::shared::store_config::AvailableStores;
use leptos::prelude::*;

use super::talon::StoreSwitcherTalon;

/// Store data and switching behaviour behind the switcher.
pub trait StoreSwitcherController: Send + Sync {
    /// Stores the shopper can switch to. Reading inside a reactive scope
    /// subscribes that scope to changes.
    fn available_stores(&self) -> AvailableStores;

    fn handle_switch_store(&self, store_code: &str);
}

/// Query document the default controller sends.
#[derive(Debug, Clone, Copy)]
pub struct TalonConfig {
    pub query: &'static str,
    pub operation_name: &'static str,
}

impl TalonConfig {
    pub fn new(query: &'static str, operation_name: &'static str) -> Self {
        Self {
            query,
            operation_name,
        }
    }

    /// `GetAvailableStoresConfigData`, the storefront's store list query.
    pub fn available_stores() -> Self {
        Self::new(
            GET_AVAILABLE_STORES_CONFIG_DATA,
            GET_AVAILABLE_STORES_CONFIG_DATA_OPERATION,
        )
    }
}

/// Shared handle to the controller, provided through context.
#[derive(Clone)]
pub struct StoreSwitcherHandle(Arc<dyn StoreSwitcherController>);

impl StoreSwitcherHandle {
    pub fn new(controller: impl StoreSwitcherController + 'static) -> Self {
        Self(Arc::new(controller))
    }
}

impl StoreSwitcherController for StoreSwitcherHandle {
    fn available_stores(&self) -> AvailableStores {
        self.0.available_stores()
    }

    fn handle_switch_store(&self, store_code: &str) {
        self.0.handle_switch_store(store_code)
    }
}

/// Create the default controller and provide it to descendants.
pub fn provide_store_switcher(config: TalonConfig) -> StoreSwitcherHandle {
    let handle = StoreSwitcherHandle::new(StoreSwitcherTalon::new(config));
    provide_context(handle.clone());
    handle
}

/// Controller from context, or a freshly provided default one.
pub fn use_store_switcher(config: TalonConfig) -> StoreSwitcherHandle {
    use_context::<StoreSwitcherHandle>().unwrap_or_else(|| provide_store_switcher(config))
}
