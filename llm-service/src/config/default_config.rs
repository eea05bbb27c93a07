//! Default model configs resolved from environment variables.
//!
//! # Environment variables
//!
//! - `GROQ_URL`      = API base (default `https://api.groq.com/openai`)
//! - `GROQ_MODEL`    = chat model (default `llama-3.3-70b-versatile`)
//! - `GROQ_API_KEY`  = process-wide default credential (optional; a
//!   request-supplied key always wins)
//! - `LLM_MAX_TOKENS` = optional generation cap (u32)

use crate::config::llm_model_config::LlmModelConfig;
use crate::config::llm_provider::LlmProvider;
use crate::error_handler::GenerationError;

/// Sampling temperature for summaries: low for repeatable, factual output.
pub const SUMMARY_TEMPERATURE: f32 = 0.1;

/// Builds the Groq summary config, resolving the credential explicitly.
///
/// Precedence: `api_key_override` (from the request body) wins over
/// `GROQ_API_KEY`; if neither is present the request fails before any
/// model call is made.
///
/// # Errors
/// Returns [`GenerationError::AuthFailure`] when no credential resolves.
pub fn config_groq_summary(
    api_key_override: Option<String>,
) -> Result<LlmModelConfig, GenerationError> {
    let api_key = api_key_override
        .filter(|s| !s.trim().is_empty())
        .or_else(|| {
            std::env::var("GROQ_API_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .ok_or_else(|| GenerationError::AuthFailure {
            reason: "no model credential: request apiKey and GROQ_API_KEY both missing".into(),
        })?;

    let endpoint =
        std::env::var("GROQ_URL").unwrap_or_else(|_| "https://api.groq.com/openai".into());
    let model = std::env::var("GROQ_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "llama-3.3-70b-versatile".into());
    let max_tokens = std::env::var("LLM_MAX_TOKENS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok());

    Ok(LlmModelConfig {
        provider: LlmProvider::Groq,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(SUMMARY_TEMPERATURE),
        top_p: None,
        timeout_secs: Some(60),
    })
}
