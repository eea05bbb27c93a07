//! Typed load failures surfaced to the pipeline unchanged.

use thiserror::Error;

/// Errors produced while loading a source URL.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be resolved: DNS/connect failure, non-success
    /// HTTP status, or a video page that no longer exists.
    #[error("source unreachable: {url}: {reason}")]
    Unreachable {
        /// The URL that was being loaded.
        url: String,
        /// Short human-readable cause.
        reason: String,
    },

    /// The page did not finish loading within the configured bound.
    #[error("source timed out after {seconds}s: {url}")]
    Timeout {
        /// The URL that was being loaded.
        url: String,
        /// Configured wait bound.
        seconds: u64,
    },

    /// The video exists but exposes no caption track for the requested
    /// language.
    #[error("no transcript in language `{language}` for {url}")]
    NoTranscript {
        /// The video URL.
        url: String,
        /// Requested caption language code.
        language: String,
    },
}

impl LoadError {
    /// Maps a `reqwest` failure onto the load taxonomy.
    pub(crate) fn from_transport(url: &str, timeout_secs: u64, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Timeout {
                url: url.to_string(),
                seconds: timeout_secs,
            }
        } else {
            LoadError::Unreachable {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }
}
