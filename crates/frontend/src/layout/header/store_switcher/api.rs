use contracts::shared::graphql::{response_data, AvailableStoresConfigData, STORE_HEADER};
use gloo_net::http::Request;
use graphql_client::{QueryBody, Response};

use super::controller::TalonConfig;
use crate::shared::api_utils::graphql_url;

/// Run the store configuration query.
///
/// `store_code` is sent in the `Store` header so `storeConfig` answers for
/// the shopper's current store view.
pub async fn fetch_available_stores(
    config: TalonConfig,
    store_code: Option<&str>,
) -> Result<AvailableStoresConfigData, String> {
    let body = QueryBody {
        variables: (),
        query: config.query,
        operation_name: config.operation_name,
    };

    let mut builder = Request::post(&graphql_url());
    if let Some(code) = store_code {
        builder = builder.header(STORE_HEADER, code);
    }

    let response = builder
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Request failed with status {}",
            response.status()
        ));
    }

    let response = response
        .json::<Response<AvailableStoresConfigData>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    response_data(response)
}
