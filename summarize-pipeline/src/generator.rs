//! Final generation stage.

use summary_rag::Fragment;
use tracing::debug;

use crate::error::PipelineError;
use crate::llm::LanguageModel;
use crate::prompt::build_summary_prompt;

/// Renders the summary prompt from the retrieved fragments and asks the
/// model for a completion. The model output is returned verbatim.
///
/// # Errors
/// - [`llm_service::GenerationError::EmptyResponse`] when the model returns
///   only whitespace
/// - any other [`llm_service::GenerationError`] from the client, unchanged
pub async fn generate_summary(
    fragments: &[&Fragment],
    model: &dyn LanguageModel,
) -> Result<String, PipelineError> {
    let prompt = build_summary_prompt(fragments);
    debug!(
        target: "summarize_pipeline",
        fragments = fragments.len(),
        prompt_chars = prompt.len(),
        "generating summary"
    );

    let text = model.generate(&prompt).await?;
    if text.trim().is_empty() {
        return Err(llm_service::GenerationError::EmptyResponse.into());
    }
    Ok(text)
}
