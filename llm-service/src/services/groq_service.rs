//! Groq chat-completion service.
//!
//! Minimal, non-streaming client around the OpenAI-compatible REST API:
//! - `POST {endpoint}/v1/chat/completions`: single chat completion
//!
//! Constructor validation:
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized into [`GenerationError`]: 401/403 become
//! `AuthFailure`, everything else transport- or protocol-shaped becomes
//! `ProviderUnavailable`, and a blank completion is `EmptyResponse`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::{GenerationError, make_snippet};

/// Thin client for an OpenAI-compatible chat-completions endpoint.
///
/// Constructed per request from a complete [`LlmModelConfig`]; keeps a
/// preconfigured `reqwest::Client` with timeout and bearer credential.
#[derive(Debug)]
pub struct GroqService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl GroqService {
    /// Creates a new [`GroqService`] from the given config.
    ///
    /// # Errors
    /// - [`GenerationError::AuthFailure`] if `cfg.api_key` is missing
    /// - [`GenerationError::ProviderUnavailable`] for a bad endpoint or an
    ///   HTTP client that cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, GenerationError> {
        let api_key = cfg
            .api_key
            .clone()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| GenerationError::AuthFailure {
                reason: "missing model API key".into(),
            })?;

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(GenerationError::ProviderUnavailable {
                reason: format!("invalid model endpoint: {}", cfg.endpoint),
            });
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                GenerationError::AuthFailure {
                    reason: format!("invalid API key header: {e}"),
                }
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| GenerationError::ProviderUnavailable {
                reason: format!("http client build: {e}"),
            })?;

        let url_chat = format!("{}/v1/chat/completions", endpoint.trim_end_matches('/'));

        info!(
            provider = ?cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "GroqService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Performs a **non-streaming** chat completion and returns the text
    /// verbatim.
    ///
    /// # Errors
    /// - [`GenerationError::AuthFailure`] for 401/403 responses
    /// - [`GenerationError::ProviderUnavailable`] for transport failures,
    ///   other non-2xx statuses, and undecodable payloads
    /// - [`GenerationError::EmptyResponse`] when no non-blank choice exists
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt);

        debug!(
            model = %self.cfg.model,
            prompt_len = prompt.len(),
            "POST {}", self.url_chat
        );

        let resp = self
            .client
            .post(&self.url_chat)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::ProviderUnavailable {
                reason: format!("POST {}: {e}", self.url_chat),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                url = %self.url_chat,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(match status.as_u16() {
                401 | 403 => GenerationError::AuthFailure {
                    reason: format!("HTTP {status}: {snippet}"),
                },
                _ => GenerationError::ProviderUnavailable {
                    reason: format!("HTTP {status}: {snippet}"),
                },
            });
        }

        let out: ChatCompletionResponse =
            resp.json()
                .await
                .map_err(|e| GenerationError::ProviderUnavailable {
                    reason: format!("serde error: {e}; expected `choices[0].message.content`"),
                })?;

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            chars = content.len(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads & options
======================================================================== */

/// Minimal request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str) -> Self {
        Self {
            model: &cfg.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            max_tokens: cfg.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal response for `/v1/chat/completions`.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}
