//! Language model capability seam.

use async_trait::async_trait;
use llm_service::{GenerationError, GroqService};

/// Anything that can turn a prompt into a completion.
///
/// The pipeline only ever calls this; concrete clients (Groq, or stubs in
/// tests) plug in behind it.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Produces one non-streaming completion for `prompt`.
    ///
    /// # Errors
    /// Returns [`GenerationError`] on auth, transport, or empty output.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[async_trait]
impl LanguageModel for GroqService {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        GroqService::generate(self, prompt).await
    }
}
