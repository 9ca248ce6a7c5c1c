//! Test Helper Utilities
//!
//! Shared utilities for testing factify-api

#![allow(dead_code)]

pub mod log_capture;
pub mod mock_providers;
pub mod stub_server;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use factify_api::providers::ProviderSet;
use factify_api::AppState;
use factify_common::Settings;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

pub use log_capture::{capture_logs, LogCapture};
pub use mock_providers::*;
pub use stub_server::*;

/// Router over the given providers with default settings
pub fn test_app(providers: ProviderSet) -> Router {
    test_app_with(Settings::default(), providers)
}

pub fn test_app_with(settings: Settings, providers: ProviderSet) -> Router {
    factify_api::build_router(AppState::new(settings, providers))
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Settings with both upstream credentials set and short timeouts
pub fn configured_settings(ai_base_url: &str, fact_check_base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.credentials.openai_api_key = Some("sk-test-secret-key".to_string());
    settings.credentials.google_fact_check_api_key = Some("gfc-test-secret-key".to_string());
    settings.ai.base_url = ai_base_url.to_string();
    settings.ai.timeout_seconds = 1;
    settings.fact_check.base_url = fact_check_base_url.to_string();
    settings.fact_check.timeout_seconds = 1;
    settings
}
