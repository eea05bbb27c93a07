//! Embedding provider seam.
//!
//! The index only depends on this trait; concrete backends live alongside
//! it (currently an OpenAI-compatible HTTP embedder) and can be swapped
//! without touching index construction or retrieval.

use async_trait::async_trait;

use crate::errors::EmbeddingError;

/// Capability interface for embedding backends.
#[async_trait]
pub trait EmbeddingsProvider: Send + Sync {
    /// Embeds one text into a fixed-dimension vector.
    ///
    /// # Errors
    /// - [`EmbeddingError::ProviderUnavailable`] on transport/server failure
    /// - [`EmbeddingError::InvalidInput`] when the provider rejects the call
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

pub mod openai;
