use axum::{extract::State, http::HeaderMap, Json};
use contracts::shared::graphql::STORE_HEADER;
use graphql_client::Response;

use crate::routes::AppState;
use crate::shared::graphql::{self, GraphQlRequest};

fn store_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(STORE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// POST /graphql
pub async fn execute(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GraphQlRequest>,
) -> Json<Response<serde_json::Value>> {
    Json(graphql::execute_request(
        &request,
        &state.config.stores,
        store_header(&headers),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_store_header_is_trimmed_and_optional() {
        let mut headers = HeaderMap::new();
        assert_eq!(store_header(&headers), None);

        headers.insert("store", HeaderValue::from_static(" outlet "));
        assert_eq!(store_header(&headers), Some("outlet"));

        headers.insert("store", HeaderValue::from_static(""));
        assert_eq!(store_header(&headers), None);
    }
}
