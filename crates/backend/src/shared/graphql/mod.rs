//! Storefront GraphQL endpoint backed by the configured store views.
//!
//! Root fields:
//! - `storeConfig`: the store named by the `Store` header, else the default
//!   store, else the first configured one
//! - `availableStores`: every configured store in configuration order

pub mod error;
pub mod parser;

use contracts::shared::store_config::StoreConfig;
use graphql_client::Response;
use serde::Deserialize;
use serde_json::{Map, Value};

pub use error::GraphQlError;
pub use parser::{parse_query, Field, Operation};

/// Body of a `POST /graphql` request, as serialized from
/// `graphql_client::QueryBody`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub variables: Option<Value>,
}

const QUERY_TYPE: &str = "Query";
const STORE_CONFIG_TYPE: &str = "StoreConfig";

fn current_store<'a>(stores: &'a [StoreConfig], store_header: Option<&str>) -> Option<&'a StoreConfig> {
    store_header
        .and_then(|code| stores.iter().find(|s| s.store_code == code))
        .or_else(|| stores.iter().find(|s| s.is_default_store))
        .or_else(|| stores.first())
}

fn scalar_type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Int",
        _ => "String",
    }
}

fn project_store(store: &StoreConfig, selection: &[Field]) -> Result<Value, GraphQlError> {
    let source = match serde_json::to_value(store) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let mut projected = Map::new();
    for field in selection {
        if field.name == "__typename" {
            projected.insert(field.name.clone(), Value::from(STORE_CONFIG_TYPE));
            continue;
        }
        let value = source
            .get(&field.name)
            .ok_or_else(|| GraphQlError::UnknownField {
                field: field.name.clone(),
                type_name: STORE_CONFIG_TYPE,
            })?;
        if !field.selection.is_empty() {
            return Err(GraphQlError::UnexpectedSelection {
                field: field.name.clone(),
                type_name: scalar_type_name(value),
            });
        }
        projected.insert(field.name.clone(), value.clone());
    }
    Ok(Value::Object(projected))
}

fn require_selection(field: &Field) -> Result<(), GraphQlError> {
    if field.selection.is_empty() {
        return Err(GraphQlError::MissingSelection {
            field: field.name.clone(),
            type_name: STORE_CONFIG_TYPE,
        });
    }
    Ok(())
}

/// Resolve a parsed operation against the configured stores.
pub fn execute(
    operation: &Operation,
    stores: &[StoreConfig],
    store_header: Option<&str>,
) -> Result<Value, GraphQlError> {
    let mut data = Map::new();

    for field in &operation.selection {
        let value = match field.name.as_str() {
            "__typename" => Value::from(QUERY_TYPE),
            "storeConfig" => {
                require_selection(field)?;
                match current_store(stores, store_header) {
                    Some(store) => project_store(store, &field.selection)?,
                    None => Value::Null,
                }
            }
            "availableStores" => {
                require_selection(field)?;
                let projected = stores
                    .iter()
                    .map(|store| project_store(store, &field.selection))
                    .collect::<Result<Vec<_>, _>>()?;
                Value::Array(projected)
            }
            other => {
                return Err(GraphQlError::UnknownField {
                    field: other.to_string(),
                    type_name: QUERY_TYPE,
                })
            }
        };
        data.insert(field.name.clone(), value);
    }

    Ok(Value::Object(data))
}

/// Parse and execute a request, folding failures into the `errors` list.
pub fn execute_request(
    request: &GraphQlRequest,
    stores: &[StoreConfig],
    store_header: Option<&str>,
) -> Response<Value> {
    let result = parse_query(&request.query).and_then(|operation| {
        tracing::debug!(
            operation = operation.name.as_deref().unwrap_or("<anonymous>"),
            store = store_header.unwrap_or("<none>"),
            "executing storefront query"
        );
        execute(&operation, stores, store_header)
    });

    match result {
        Ok(data) => Response {
            data: Some(data),
            errors: None,
            extensions: None,
        },
        Err(e) => {
            tracing::warn!("GraphQL request failed: {}", e);
            Response {
                data: None,
                errors: Some(vec![graphql_client::Error {
                    message: e.to_string(),
                    locations: None,
                    path: None,
                    extensions: None,
                }]),
                extensions: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::graphql::{
        response_data, AvailableStoresConfigData, GET_AVAILABLE_STORES_CONFIG_DATA,
        GET_AVAILABLE_STORES_CONFIG_DATA_OPERATION,
    };

    fn request(query: &str) -> GraphQlRequest {
        GraphQlRequest {
            query: query.to_string(),
            operation_name: None,
            variables: None,
        }
    }

    fn stores() -> Vec<StoreConfig> {
        let mut main = StoreConfig::new("default", "Main");
        main.default_display_currency_code = "USD".into();
        main.is_default_store = true;
        let mut outlet = StoreConfig::new("outlet", "Outlet");
        outlet.default_display_currency_code = "EUR".into();
        vec![outlet, main]
    }

    fn run(query: &str, header: Option<&str>) -> Result<Value, GraphQlError> {
        execute(&parse_query(query).unwrap(), &stores(), header)
    }

    #[test]
    fn test_available_stores_projects_requested_fields_in_order() {
        let data = run("{ availableStores { store_code store_name } }", None).unwrap();

        assert_eq!(
            data,
            serde_json::json!({
                "availableStores": [
                    { "store_code": "outlet", "store_name": "Outlet" },
                    { "store_code": "default", "store_name": "Main" }
                ]
            })
        );
    }

    #[test]
    fn test_store_config_uses_store_header() {
        let data = run("{ storeConfig { store_code } }", Some("outlet")).unwrap();
        assert_eq!(data["storeConfig"]["store_code"], "outlet");
    }

    #[test]
    fn test_store_config_falls_back_to_default_store() {
        let data = run("{ storeConfig { store_code } }", None).unwrap();
        assert_eq!(data["storeConfig"]["store_code"], "default");

        let data = run("{ storeConfig { store_code } }", Some("missing")).unwrap();
        assert_eq!(data["storeConfig"]["store_code"], "default");
    }

    #[test]
    fn test_store_config_without_stores_is_null() {
        let op = parse_query("{ storeConfig { store_code } }").unwrap();
        let data = execute(&op, &[], None).unwrap();
        assert!(data["storeConfig"].is_null());
    }

    #[test]
    fn test_unknown_fields_are_errors() {
        assert_eq!(
            run("{ products { sku } }", None).unwrap_err(),
            GraphQlError::UnknownField {
                field: "products".into(),
                type_name: "Query"
            }
        );
        assert_eq!(
            run("{ availableStores { website_id } }", None).unwrap_err(),
            GraphQlError::UnknownField {
                field: "website_id".into(),
                type_name: "StoreConfig"
            }
        );
    }

    #[test]
    fn test_selection_rules() {
        assert!(matches!(
            run("{ availableStores }", None).unwrap_err(),
            GraphQlError::MissingSelection { .. }
        ));
        assert_eq!(
            run("{ storeConfig { is_default_store { x } } }", None).unwrap_err(),
            GraphQlError::UnexpectedSelection {
                field: "is_default_store".into(),
                type_name: "Boolean"
            }
        );
    }

    #[test]
    fn test_typename() {
        let data = run("{ __typename storeConfig { __typename } }", None).unwrap();
        assert_eq!(data["__typename"], "Query");
        assert_eq!(data["storeConfig"]["__typename"], "StoreConfig");
    }

    #[test]
    fn test_repeated_root_fields_keep_every_selected_subfield() {
        let data = run(
            "{ storeConfig { store_code } storeConfig { store_name } }",
            Some("outlet"),
        )
        .unwrap();

        assert_eq!(
            data,
            serde_json::json!({
                "storeConfig": { "store_code": "outlet", "store_name": "Outlet" }
            })
        );
    }

    #[test]
    fn test_request_body_from_query_body() {
        let body = serde_json::json!({
            "variables": null,
            "query": GET_AVAILABLE_STORES_CONFIG_DATA,
            "operationName": GET_AVAILABLE_STORES_CONFIG_DATA_OPERATION,
        });
        let request: GraphQlRequest = serde_json::from_value(body).unwrap();

        assert_eq!(
            request.operation_name.as_deref(),
            Some("GetAvailableStoresConfigData")
        );
        assert!(request.variables.is_none());
    }

    #[test]
    fn test_store_switcher_query_round_trips_into_contract() {
        let response = execute_request(
            &request(GET_AVAILABLE_STORES_CONFIG_DATA),
            &stores(),
            Some("outlet"),
        );
        let body = serde_json::to_string(&response).unwrap();

        let decoded: Response<AvailableStoresConfigData> = serde_json::from_str(&body).unwrap();
        let data = response_data(decoded).unwrap();
        assert_eq!(data.current_store_code(), "outlet");

        let stores = data.stores();
        let codes: Vec<&str> = stores.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["outlet", "default"]);
        assert_eq!(stores.get("outlet").unwrap().default_display_currency_code, "EUR");
    }

    #[test]
    fn test_parse_errors_reported_in_errors_list() {
        let response = execute_request(
            &request("{ availableStores(useCurrentGroup: true) { store_code } }"),
            &stores(),
            None,
        );

        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("not supported"));
    }

    #[test]
    fn test_deep_nesting_reported_as_error() {
        let query = format!("{{ {}b{} }}", "a{".repeat(100_000), "}".repeat(100_000));
        let response = execute_request(&request(&query), &stores(), None);

        assert!(response.data.is_none());
        assert!(response.errors.unwrap()[0].message.contains("maximum depth"));
    }
}
