use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{delete, get},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    config::Config,
    controller::{card, health, list},
    state::AppState,
};

pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .route("/", get(health::index))
        .route(
            "/lists",
            get(list::get_lists)
                .post(list::create_list)
                .put(list::update_lists),
        )
        .route("/lists/{id}", delete(list::delete_list))
        .route(
            "/cards",
            get(card::get_cards)
                .post(card::create_card)
                .put(card::update_cards),
        )
        .route("/cards/{id}", delete(card::delete_card))
        .layer(cors_layer(config))
}

/// Builds the CORS layer from the configured origin list.
///
/// Requests from origins outside the list are rejected by the layer before
/// any handler runs.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}
