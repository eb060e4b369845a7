use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::Store;

mod error;
mod fortunes;
pub mod identity;
mod saved;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;
pub use validation::{FieldError, ValidationError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,
}

#[must_use]
pub fn create_app_state(config: Config, store: Store) -> Arc<AppState> {
    Arc::new(AppState {
        config: Arc::new(RwLock::new(config)),
        store,
    })
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.config.read().await;
        config.server.cors_allowed_origins.clone()
    };

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let api_router = Router::new()
        .route("/fortunes", get(fortunes::list_fortunes))
        .route("/fortunes", post(fortunes::create_fortune))
        .route(
            "/fortunes/category/{category}",
            get(fortunes::list_by_category),
        )
        .route("/fortunes/random", get(fortunes::random_fortune))
        .route("/fortunes/{id}", get(fortunes::get_fortune))
        .route("/saved-fortunes", get(saved::list_saved))
        .route("/saved-fortunes", post(saved::save_fortune))
        .route("/saved-fortunes", delete(saved::clear_saved))
        .route("/saved-fortunes/{id}", delete(saved::delete_saved))
        .with_state(state);

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
