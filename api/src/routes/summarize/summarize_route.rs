use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use llm_service::{GroqService, config_groq_summary};
use summarize_pipeline::{PipelineError, summarize};
use tracing::{info, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::summarize::{
        summarize_request::SummarizeRequest, summarize_response::SummarizeResponse,
    },
};

/// HTTP endpoint producing a summary for one URL.
///
/// Expects a JSON payload with `link` and an optional `apiKey`. The key
/// from the body wins over the server-side `GROQ_API_KEY`; if neither is
/// present the request fails with 401 before any model call is made.
#[instrument(name = "summarize_route", skip(state, payload))]
pub async fn summarize_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> AppResult<Json<SummarizeResponse>> {
    let Json(body) = payload?;

    let link = body.link.trim();
    if link.is_empty() {
        return Err(AppError::BadRequest("`link` must be a non-empty URL".into()));
    }

    info!(link, has_request_key = body.api_key.is_some(), "summarize requested");

    // Per-request model client: the credential may come from the body.
    let model_cfg = config_groq_summary(body.api_key.clone()).map_err(PipelineError::from)?;
    let model = GroqService::new(model_cfg).map_err(PipelineError::from)?;

    let message = summarize(link, &state.options, &state.embedder, &model).await?;

    Ok(Json(SummarizeResponse { message }))
}
