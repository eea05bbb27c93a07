//! Unified generation errors.
//!
//! The taxonomy is deliberately small: the pipeline treats any generation
//! failure as fatal for the request and never retries, so variants only
//! need to carry enough to tell a credential problem from an outage.

use thiserror::Error;

/// Errors produced while generating the summary text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The model provider rejected the credential (missing key, 401/403).
    #[error("model credential rejected: {reason}")]
    AuthFailure {
        /// Short human-readable cause.
        reason: String,
    },

    /// The provider could not be reached, answered with a non-auth error
    /// status, or returned an undecodable payload.
    #[error("model provider unavailable: {reason}")]
    ProviderUnavailable {
        /// Short human-readable cause (transport error, HTTP status).
        reason: String,
    },

    /// The call succeeded but the model produced no usable text.
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Trims a response body to a log-friendly snippet.
pub(crate) fn make_snippet(body: &str) -> String {
    body.chars().take(240).collect()
}
