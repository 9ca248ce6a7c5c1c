//! GET /sources - the curated fact-checking organisations

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::providers::CURATED_SOURCES;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TrustedSource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrustedSourcesResponse {
    pub sources: Vec<TrustedSource>,
}

pub async fn list_sources() -> Json<TrustedSourcesResponse> {
    Json(TrustedSourcesResponse {
        sources: CURATED_SOURCES
            .iter()
            .map(|source| TrustedSource {
                name: source.name.to_string(),
                url: source.url.to_string(),
            })
            .collect(),
    })
}

pub fn source_routes() -> Router<AppState> {
    Router::new().route("/sources", get(list_sources))
}
