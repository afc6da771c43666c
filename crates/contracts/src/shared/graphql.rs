//! Storefront GraphQL operations.
//!
//! Response types are generated by `graphql_client` from
//! `graphql/schema.graphql` and the documents under `graphql/queries/`.

use graphql_client::{GraphQLQuery, Response};

use super::store_config::{AvailableStores, StoreConfig};

/// HTTP header carrying the shopper's current store view code.
pub const STORE_HEADER: &str = "Store";

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/stores.graphql",
    response_derives = "Debug, Clone, PartialEq"
)]
pub struct GetAvailableStoresConfigData;

pub use get_available_stores_config_data::ResponseData as AvailableStoresConfigData;

/// Query used by the store switcher to load the current and available stores.
pub const GET_AVAILABLE_STORES_CONFIG_DATA: &str = get_available_stores_config_data::QUERY;
pub const GET_AVAILABLE_STORES_CONFIG_DATA_OPERATION: &str =
    get_available_stores_config_data::OPERATION_NAME;

/// Errors win over partial data; no data and no errors is also an error.
pub fn response_data<T>(response: Response<T>) -> Result<T, String> {
    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(messages.join("; "));
    }
    response
        .data
        .ok_or_else(|| "GraphQL response contained no data".to_string())
}

impl From<&get_available_stores_config_data::GetAvailableStoresConfigDataAvailableStores>
    for StoreConfig
{
    fn from(
        store: &get_available_stores_config_data::GetAvailableStoresConfigDataAvailableStores,
    ) -> Self {
        let mut config = StoreConfig::new(store.store_code.clone(), store.store_name.clone());
        config.locale = store.locale.clone().unwrap_or_default();
        config.default_display_currency_code = store
            .default_display_currency_code
            .clone()
            .unwrap_or_default();
        config.secure_base_media_url = store.secure_base_media_url.clone().unwrap_or_default();
        config.is_default_store = store.is_default_store.unwrap_or(false);
        config
    }
}

impl AvailableStoresConfigData {
    pub fn stores(&self) -> AvailableStores {
        self.available_stores.iter().map(StoreConfig::from).collect()
    }

    /// Store code `storeConfig` answered for.
    pub fn current_store_code(&self) -> &str {
        &self.store_config.store_code
    }
}
