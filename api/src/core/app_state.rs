use summarize_pipeline::{PipelineError, SummarizeOptions};
use summary_rag::embed::openai::{OpenAiEmbedder, OpenAiEmbedderConfig};

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// The embedder is built once at startup and reused; the model client is
/// per request because its credential may come from the request body.
pub struct AppState {
    /// Pipeline tuning (chunking, top-K, loader settings).
    pub options: SummarizeOptions,
    /// Embedding backend shared across requests.
    pub embedder: OpenAiEmbedder,
}

impl AppState {
    /// Loads shared state from environment variables.
    ///
    /// # Errors
    /// Returns an [`AppError`] when `OPENAI_API_KEY` is missing or the
    /// embedding client cannot be constructed.
    pub fn from_env() -> Result<Self, AppError> {
        let embedder = OpenAiEmbedderConfig::from_env()
            .and_then(OpenAiEmbedder::new)
            .map_err(PipelineError::from)?;

        Ok(Self {
            options: SummarizeOptions::from_env(),
            embedder,
        })
    }
}
