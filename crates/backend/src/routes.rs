use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Routes of the storefront dev server
pub fn configure_routes(state: AppState, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/graphql", post(handlers::graphql::execute))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
