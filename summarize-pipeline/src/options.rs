//! Pipeline tuning knobs.
//!
//! # Environment variables
//!
//! - `SUMMARY_TOP_K`          = fragments retrieved for the prompt,
//!   clamped to 4..=8 (default 4)
//! - `EMBEDDING_CONCURRENCY`  = in-flight embedding calls (default 8)
//! - plus the loader variables read by [`source_loader::LoaderConfig`]

use source_loader::LoaderConfig;
use summary_rag::ChunkConfig;

const TOP_K_MIN: usize = 4;
const TOP_K_MAX: usize = 8;
const DEFAULT_EMBED_CONCURRENCY: usize = 8;

/// All per-request pipeline settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// Fragment size and overlap for the chunker.
    pub chunking: ChunkConfig,
    /// How many fragments the retriever hands to the prompt.
    pub top_k: usize,
    /// Parallelism of the embedding stage.
    pub embed_concurrency: usize,
    /// Loader settings (transcript language, page timeout).
    pub loader: LoaderConfig,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            chunking: ChunkConfig::default(),
            top_k: TOP_K_MIN,
            embed_concurrency: DEFAULT_EMBED_CONCURRENCY,
            loader: LoaderConfig::default(),
        }
    }
}

impl SummarizeOptions {
    /// Reads options from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let top_k = std::env::var("SUMMARY_TOP_K")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .map(|k| k.clamp(TOP_K_MIN, TOP_K_MAX))
            .unwrap_or(TOP_K_MIN);
        let embed_concurrency = std::env::var("EMBEDDING_CONCURRENCY")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_EMBED_CONCURRENCY);

        Self {
            chunking: ChunkConfig::default(),
            top_k,
            embed_concurrency,
            loader: LoaderConfig::from_env(),
        }
    }
}
