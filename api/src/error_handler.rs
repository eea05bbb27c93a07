//! Application error type and the pipeline-to-HTTP status mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llm_service::GenerationError;
use serde::Serialize;
use source_loader::LoadError;
use summarize_pipeline::PipelineError;
use summary_rag::EmbeddingError;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Rich HTTP error mapped from the pipeline with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Http { status, .. } => *status,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Converts a [`PipelineError`] to `AppError::Http` with a precise status
/// and stable machine-readable code.
///
/// | failure                              | status | code                    |
/// |--------------------------------------|--------|-------------------------|
/// | video has no usable caption track    | 422    | `NO_TRANSCRIPT`         |
/// | source host unreachable / non-2xx    | 502    | `SOURCE_UNREACHABLE`    |
/// | source load exceeded its time bound  | 504    | `RENDER_TIMEOUT`        |
/// | embedding provider rejected input    | 422    | `EMBEDDING_REJECTED`    |
/// | embedding provider down              | 502    | `EMBEDDING_UNAVAILABLE` |
/// | model credential rejected or missing | 401    | `MODEL_AUTH`            |
/// | model returned a blank completion    | 502    | `EMPTY_COMPLETION`      |
/// | model provider down                  | 502    | `MODEL_UNAVAILABLE`     |
impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let (status, code) = match &err {
            PipelineError::Load(LoadError::NoTranscript { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "NO_TRANSCRIPT")
            }
            PipelineError::Load(LoadError::Unreachable { .. }) => {
                (StatusCode::BAD_GATEWAY, "SOURCE_UNREACHABLE")
            }
            PipelineError::Load(LoadError::Timeout { .. }) => {
                (StatusCode::GATEWAY_TIMEOUT, "RENDER_TIMEOUT")
            }
            PipelineError::Embedding(EmbeddingError::InvalidInput { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "EMBEDDING_REJECTED")
            }
            PipelineError::Embedding(EmbeddingError::ProviderUnavailable { .. }) => {
                (StatusCode::BAD_GATEWAY, "EMBEDDING_UNAVAILABLE")
            }
            PipelineError::Generation(GenerationError::AuthFailure { .. }) => {
                (StatusCode::UNAUTHORIZED, "MODEL_AUTH")
            }
            PipelineError::Generation(GenerationError::EmptyResponse) => {
                (StatusCode::BAD_GATEWAY, "EMPTY_COMPLETION")
            }
            PipelineError::Generation(GenerationError::ProviderUnavailable { .. }) => {
                (StatusCode::BAD_GATEWAY, "MODEL_UNAVAILABLE")
            }
        };

        AppError::Http {
            status,
            code,
            message: err.to_string(),
        }
    }
}
