//! HTTP surface of the summarizer service.
//!
//! One business route, one health probe:
//! - `POST /summarize` accepts `{"link", "apiKey"}` and returns
//!   `{"message"}` with the generated summary
//! - `GET /health` is the liveness probe

use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
mod routes;

use axum::{
    Json,
    Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
use crate::error_handler::{AppError, AppResult};
use crate::routes::summarize::summarize_route::summarize_route;

/// Binds the listener and serves until Ctrl+C.
///
/// # Errors
/// - [`AppError`] for state construction, bind, and serve failures
pub async fn start() -> AppResult<()> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into());

    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/summarize", post(summarize_route))
        .route("/health", get(health))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "summarizer API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install shutdown signal handler");
    }
}
