//! Typed embedding failures.

use thiserror::Error;

/// Errors produced while turning text into vectors.
///
/// Fatal for the request: the index build is not retried internally.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The provider could not be reached or answered with a server-side
    /// failure.
    #[error("embedding provider unavailable: {reason}")]
    ProviderUnavailable {
        /// Short human-readable cause (transport error, HTTP status).
        reason: String,
    },

    /// The provider rejected the request: bad credentials, empty input,
    /// or an undecodable response.
    #[error("embedding input rejected: {reason}")]
    InvalidInput {
        /// What the provider (or decoding) complained about.
        reason: String,
    },
}
