//! POST /fact-check

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use factify_common::time;
use std::any::Any;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{CheckRequest, FactCheckPayload, FactCheckResponse};
use crate::AppState;

/// Validate, aggregate and stamp timing metadata
///
/// Validation failures return 400 before any provider is contacted.
/// Evaluation runs in its own task so a panic inside a provider or the
/// reduction becomes a 500 instead of a dropped connection.
pub async fn fact_check(
    State(state): State<AppState>,
    payload: Result<Json<FactCheckPayload>, JsonRejection>,
) -> ApiResult<Json<FactCheckResponse>> {
    let Json(payload) = payload?;
    let request = CheckRequest::validate(payload, &state.settings.limits)?;
    let request_id = Uuid::new_v4();

    let span = info_span!("fact_check", %request_id);
    async move {
        info!(
            text_chars = request.text().chars().count(),
            has_url = request.url().is_some(),
            has_context = request.context().is_some(),
            "Fact-check requested"
        );

        let started = Instant::now();
        let aggregator = Arc::clone(&state.aggregator);
        let verdict = tokio::spawn(
            async move { aggregator.evaluate(&request).await }.in_current_span(),
        )
        .await
        .map_err(evaluation_failed)?;
        let processing_time = time::duration_secs(started.elapsed());

        info!(
            status = %verdict.status,
            processing_time,
            "Fact-check completed"
        );

        Ok::<_, ApiError>(Json(FactCheckResponse::from_verdict(
            verdict,
            request_id,
            time::now(),
            processing_time,
        )))
    }
    .instrument(span)
    .await
}

fn evaluation_failed(err: JoinError) -> ApiError {
    if err.is_panic() {
        ApiError::Internal(panic_message(err.into_panic()))
    } else {
        ApiError::Internal("evaluation was cancelled".to_string())
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "evaluation failed".to_string()
    }
}

pub fn fact_check_routes() -> Router<AppState> {
    Router::new().route("/fact-check", post(fact_check))
}
