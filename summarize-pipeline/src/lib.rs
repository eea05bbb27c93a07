//! RAG summarization pipeline with a single public entry point.
//!
//! Public API: [`summarize`]. It classifies the URL, loads the source,
//! chunks it, builds the request-scoped vector index, retrieves the top-K
//! fragments for the fixed summary query, and asks the language model for
//! the final text. Stages run strictly in sequence; the first failure is
//! forwarded unchanged.

mod error;
mod generator;
mod llm;
mod options;
mod prompt;

pub use error::PipelineError;
pub use generator::generate_summary;
pub use llm::LanguageModel;
pub use options::SummarizeOptions;
pub use prompt::{SUMMARY_TEMPLATE, build_summary_prompt};

use source_loader::{SourceLoader, classify, loader_for};
use summary_rag::{EmbeddingsProvider, Retriever, VectorIndex, split_documents};
use tracing::{debug, info};

/// Summarizes one URL end to end.
///
/// Dispatches to the video or page loader based on [`classify`], then runs
/// the shared pipeline. Loaders, index and fragments all live and die with
/// this call; nothing is shared across requests.
///
/// # Errors
/// Forwards the first stage failure as [`PipelineError`], preserving the
/// original error kind.
pub async fn summarize(
    url: &str,
    opts: &SummarizeOptions,
    embedder: &dyn EmbeddingsProvider,
    model: &dyn LanguageModel,
) -> Result<String, PipelineError> {
    let kind = classify(url);
    info!(target: "summarize_pipeline", url, ?kind, "summarize: start");

    let loader = loader_for(kind, &opts.loader)?;
    summarize_with_loader(url, loader.as_ref(), opts, embedder, model).await
}

/// Runs the pipeline with an explicitly chosen loader.
///
/// Exposed as its own seam so callers (and tests) can substitute a loader
/// without going through URL classification.
///
/// # Errors
/// Forwards the first stage failure as [`PipelineError`].
pub async fn summarize_with_loader(
    url: &str,
    loader: &dyn SourceLoader,
    opts: &SummarizeOptions,
    embedder: &dyn EmbeddingsProvider,
    model: &dyn LanguageModel,
) -> Result<String, PipelineError> {
    // 1) Load raw documents from the source.
    let docs = loader.load(url).await?;
    debug!(target: "summarize_pipeline", docs = docs.len(), "source loaded");

    // 2) Chunk into overlapping fragments.
    let fragments = split_documents(&docs, opts.chunking);
    debug!(target: "summarize_pipeline", fragments = fragments.len(), "documents chunked");

    // 3) Embed + index, request-scoped.
    let index = VectorIndex::build(fragments, embedder, opts.embed_concurrency).await?;

    // 4) Retrieve the top-K fragments for the fixed summary query.
    let retriever = Retriever::new(&index, opts.top_k);
    let hits = retriever.retrieve(embedder).await?;

    // 5) Assemble the prompt and generate.
    let summary = generate_summary(&hits, model).await?;

    info!(
        target: "summarize_pipeline",
        url,
        indexed = index.len(),
        retrieved = hits.len(),
        summary_chars = summary.len(),
        "summarize: done"
    );

    Ok(summary)
}
