//! HTTP API handlers for factify-api

pub mod fact_check;
pub mod health;
pub mod sources;

pub use fact_check::fact_check_routes;
pub use health::health_routes;
pub use sources::source_routes;

use axum::http::{header, HeaderValue, Method};
use factify_common::config::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// CORS policy for browser-extension callers
///
/// `"*"` allows any origin without credentials. An explicit list allows
/// credentials, so methods and headers must be listed too.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
}
