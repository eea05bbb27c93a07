//! Loader capability trait and dispatch.

use async_trait::async_trait;

use crate::classify::SourceKind;
use crate::document::RawDocument;
use crate::errors::LoadError;
use crate::page::PageLoader;
use crate::video::VideoLoader;

/// Capability interface for turning a URL into raw documents.
///
/// Implementations perform outbound network I/O; this is the only place in
/// the pipeline where a source is contacted.
#[async_trait]
pub trait SourceLoader: Send + Sync {
    /// Loads the source and returns one or more raw documents.
    ///
    /// # Errors
    /// - [`LoadError::Unreachable`] when the source cannot be resolved
    /// - [`LoadError::Timeout`] when the load exceeds the configured bound
    /// - [`LoadError::NoTranscript`] for videos without a caption track
    async fn load(&self, url: &str) -> Result<Vec<RawDocument>, LoadError>;
}

/// Per-request loader settings.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Caption language requested from the video host.
    pub language: String,
    /// Upper bound on page fetch/render wait, in seconds.
    pub page_timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            page_timeout_secs: 20,
        }
    }
}

impl LoaderConfig {
    /// Reads overrides from `TRANSCRIPT_LANGUAGE` and `PAGE_TIMEOUT_SECS`,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let language = std::env::var("TRANSCRIPT_LANGUAGE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.language);
        let page_timeout_secs = std::env::var("PAGE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.page_timeout_secs);
        Self {
            language,
            page_timeout_secs,
        }
    }
}

/// Picks the loader implementation for a classified source.
///
/// # Errors
/// Returns [`LoadError::Unreachable`] if the underlying HTTP client cannot
/// be constructed.
pub fn loader_for(kind: SourceKind, cfg: &LoaderConfig) -> Result<Box<dyn SourceLoader>, LoadError> {
    match kind {
        SourceKind::Video => Ok(Box::new(VideoLoader::new(cfg)?)),
        SourceKind::Page => Ok(Box::new(PageLoader::new(cfg)?)),
    }
}
