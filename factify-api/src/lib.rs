//! factify-api library interface
//!
//! Exposes the router and provider seams for the binary and integration tests.

pub mod aggregator;
pub mod api;
pub mod credibility;
pub mod error;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use factify_common::Settings;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::aggregator::{Aggregator, ReductionConfig};
use crate::providers::ProviderSet;

/// Application state shared across handlers
///
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub aggregator: Arc<Aggregator>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(settings: Settings, providers: ProviderSet) -> Self {
        let aggregator = Aggregator::new(providers, ReductionConfig::from_settings(&settings));
        Self {
            settings: Arc::new(settings),
            aggregator: Arc::new(aggregator),
            startup_time: Utc::now(),
        }
    }

    /// State wired to the production adapters
    pub fn from_settings(settings: Settings) -> factify_common::Result<Self> {
        let providers = ProviderSet::from_settings(&settings)?;
        Ok(Self::new(settings, providers))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    let cors = api::cors_layer(&state.settings.server);

    Router::new()
        .merge(api::fact_check_routes())
        .merge(api::health_routes())
        .merge(api::source_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
