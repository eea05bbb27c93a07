//! OpenAI-compatible embedding backend.
//!
//! Thin client for `POST {endpoint}/v1/embeddings`. Any service speaking
//! the OpenAI embeddings wire format works; the endpoint and model come
//! from configuration so tests can point the client at a local mock.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::embed::EmbeddingsProvider;
use crate::errors::EmbeddingError;

/// Settings for the OpenAI-compatible embedder.
#[derive(Debug, Clone)]
pub struct OpenAiEmbedderConfig {
    /// API base, e.g. `https://api.openai.com`.
    pub endpoint: String,
    /// Bearer credential for the embeddings API.
    pub api_key: String,
    /// Embedding model identifier.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OpenAiEmbedderConfig {
    /// Reads `OPENAI_URL`, `OPENAI_API_KEY` and `EMBEDDING_MODEL` with
    /// defaults for everything but the key.
    ///
    /// # Errors
    /// Returns [`EmbeddingError::InvalidInput`] when `OPENAI_API_KEY` is
    /// missing or empty.
    pub fn from_env() -> Result<Self, EmbeddingError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| EmbeddingError::InvalidInput {
                reason: "OPENAI_API_KEY is not set".into(),
            })?;
        let endpoint =
            std::env::var("OPENAI_URL").unwrap_or_else(|_| "https://api.openai.com".into());
        let model = std::env::var("EMBEDDING_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "text-embedding-3-small".into());
        Ok(Self {
            endpoint,
            api_key,
            model,
            timeout_secs: 30,
        })
    }
}

/// HTTP embedder over the OpenAI embeddings API.
#[derive(Debug)]
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    model: String,
    url_embeddings: String,
}

impl OpenAiEmbedder {
    /// Builds the embedder, validating the endpoint scheme and preparing a
    /// client with the bearer credential and timeout.
    ///
    /// # Errors
    /// - [`EmbeddingError::InvalidInput`] for a bad endpoint or key header
    /// - [`EmbeddingError::ProviderUnavailable`] if the client cannot build
    pub fn new(cfg: OpenAiEmbedderConfig) -> Result<Self, EmbeddingError> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(EmbeddingError::InvalidInput {
                reason: format!("invalid embeddings endpoint: {}", cfg.endpoint),
            });
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key)).map_err(|e| {
                EmbeddingError::InvalidInput {
                    reason: format!("invalid API key header: {e}"),
                }
            })?,
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .default_headers(headers)
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                reason: format!("http client build: {e}"),
            })?;

        let url_embeddings = format!("{}/v1/embeddings", endpoint.trim_end_matches('/'));

        info!(
            target: "summary_rag::embed",
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "OpenAiEmbedder initialized"
        );

        Ok(Self {
            client,
            model: cfg.model,
            url_embeddings,
        })
    }
}

#[async_trait]
impl EmbeddingsProvider for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingsRequest {
            model: &self.model,
            input: text,
        };

        debug!(
            target: "summary_rag::embed",
            input_len = text.len(),
            "POST {}", self.url_embeddings
        );

        let resp = self
            .client
            .post(&self.url_embeddings)
            .json(&body)
            .send()
            .await
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                reason: format!("POST {}: {e}", self.url_embeddings),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet = text.chars().take(240).collect::<String>();
            return Err(if status.is_client_error() {
                EmbeddingError::InvalidInput {
                    reason: format!("HTTP {status}: {snippet}"),
                }
            } else {
                EmbeddingError::ProviderUnavailable {
                    reason: format!("HTTP {status}: {snippet}"),
                }
            });
        }

        let out: EmbeddingsResponse =
            resp.json()
                .await
                .map_err(|e| EmbeddingError::InvalidInput {
                    reason: format!("serde error: {e}; expected `data[0].embedding`"),
                })?;

        let first = out
            .data
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::InvalidInput {
                reason: "empty `data` in embeddings response".into(),
            })?;

        Ok(first.embedding)
    }
}

/// Request body for `/v1/embeddings`.
#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

/// Response body for `/v1/embeddings`.
#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn embedder(endpoint: String) -> OpenAiEmbedder {
        OpenAiEmbedder::new(OpenAiEmbedderConfig {
            endpoint,
            api_key: "test-key".into(),
            model: "text-embedding-3-small".into(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn embeds_text_and_sends_bearer_credential() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/embeddings")
                    .header("authorization", "Bearer test-key")
                    .json_body_partial(r#"{"model":"text-embedding-3-small"}"#);
                then.status(200)
                    .json_body(json!({"data": [{"embedding": [0.1, 0.2, 0.3]}]}));
            })
            .await;

        let vec = embedder(server.base_url()).embed("hello").await.unwrap();
        assert_eq!(vec, vec![0.1, 0.2, 0.3]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_errors_map_to_invalid_input() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/embeddings");
                then.status(401).body("invalid api key");
            })
            .await;

        let err = embedder(server.base_url()).embed("hello").await.unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidInput { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn server_errors_map_to_provider_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/embeddings");
                then.status(503);
            })
            .await;

        let err = embedder(server.base_url()).embed("hello").await.unwrap_err();
        assert!(
            matches!(err, EmbeddingError::ProviderUnavailable { .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = OpenAiEmbedder::new(OpenAiEmbedderConfig {
            endpoint: "ftp://nope".into(),
            api_key: "k".into(),
            model: "m".into(),
            timeout_secs: 5,
        })
        .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidInput { .. }));
    }
}
