//! Pipeline error: a transparent union of the stage errors.

use llm_service::GenerationError;
use source_loader::LoadError;
use summary_rag::EmbeddingError;

/// First failure of any pipeline stage, forwarded without rewrapping.
///
/// `transparent` keeps the stage error's own message and kind visible to
/// callers, so the HTTP layer can map each variant to a status precisely.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
