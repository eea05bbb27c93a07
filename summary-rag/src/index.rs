//! Ephemeral in-memory vector index.
//!
//! Built once per request from the chunked fragments, searched once (or a
//! handful of times) with the query vector, then dropped. No persistence,
//! no eviction, no cross-request sharing.

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use crate::embed::EmbeddingsProvider;
use crate::errors::EmbeddingError;
use crate::fragment::Fragment;

/// One stored (fragment, vector) pair.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    /// The indexed fragment.
    pub fragment: Fragment,
    /// Its embedding vector.
    pub vector: Vec<f32>,
}

/// Write-once, read-many similarity index over one request's fragments.
#[derive(Debug, Default)]
pub struct VectorIndex {
    entries: Vec<IndexEntry>,
}

impl VectorIndex {
    /// Embeds every fragment and stores the (fragment, vector) pairs.
    ///
    /// Embedding calls run with bounded concurrency against the provider;
    /// ordering among them does not matter because results are reassembled
    /// in fragment order before the index becomes searchable.
    ///
    /// # Errors
    /// Propagates the first [`EmbeddingError`] from the provider; the build
    /// is not retried.
    pub async fn build(
        fragments: Vec<Fragment>,
        provider: &dyn EmbeddingsProvider,
        concurrency: usize,
    ) -> Result<Self, EmbeddingError> {
        info!(
            target: "summary_rag::index",
            fragments = fragments.len(),
            concurrency,
            "building ephemeral index"
        );

        let results: Vec<(usize, IndexEntry)> = stream::iter(fragments.into_iter().enumerate())
            .map(|(i, fragment)| async move {
                let vector = provider.embed(&fragment.text).await?;
                Ok::<(usize, IndexEntry), EmbeddingError>((i, IndexEntry { fragment, vector }))
            })
            .buffer_unordered(concurrency.max(1))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>, EmbeddingError>>()?;

        let mut ordered = results;
        ordered.sort_by_key(|(i, _)| *i);
        let entries = ordered.into_iter().map(|(_, e)| e).collect::<Vec<_>>();

        debug!(target: "summary_rag::index", entries = entries.len(), "index built");
        Ok(Self { entries })
    }

    /// Returns the `k` fragments most similar to `query`, best first.
    ///
    /// Scoring is cosine similarity; equal scores fall back to the original
    /// fragment order, so repeated searches are fully deterministic and the
    /// top-K list for a larger `k` is a supersequence of the smaller one.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<&Fragment> {
        let mut scored: Vec<(f32, &IndexEntry)> = self
            .entries
            .iter()
            .map(|e| (cosine_similarity(query, &e.vector), e))
            .collect();

        scored.sort_by(|(sa, ea), (sb, eb)| {
            sb.partial_cmp(sa)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| ea.fragment.ordinal.cmp(&eb.fragment.ordinal))
        });

        scored
            .into_iter()
            .take(k)
            .map(|(_, e)| &e.fragment)
            .collect()
    }

    /// Number of indexed fragments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cosine similarity, 0.0 for degenerate (zero-norm or mismatched) inputs.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut na = 0.0f32;
    let mut nb = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na.sqrt() * nb.sqrt())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::Map;

    use super::*;

    /// Deterministic toy embedder: counts a few marker words so tests can
    /// steer similarity without a real provider.
    struct MarkerEmbedder;

    #[async_trait]
    impl EmbeddingsProvider for MarkerEmbedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            let lower = text.to_lowercase();
            let count = |needle: &str| lower.matches(needle).count() as f32;
            Ok(vec![count("apple"), count("banana"), count("cherry")])
        }
    }

    fn fragment(text: &str, ordinal: usize) -> Fragment {
        Fragment {
            text: text.into(),
            metadata: Map::new(),
            ordinal,
        }
    }

    async fn build_index(texts: &[&str]) -> VectorIndex {
        let fragments = texts
            .iter()
            .enumerate()
            .map(|(i, t)| fragment(t, i))
            .collect();
        VectorIndex::build(fragments, &MarkerEmbedder, 4)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn search_ranks_by_similarity() {
        let index = build_index(&[
            "cherry cherry cherry",
            "apple apple apple",
            "banana",
            "apple banana",
        ])
        .await;

        let hits = index.search(&[1.0, 0.0, 0.0], 2);
        assert_eq!(hits[0].text, "apple apple apple");
        assert_eq!(hits[1].text, "apple banana");
    }

    #[tokio::test]
    async fn ties_break_by_original_fragment_order() {
        let index = build_index(&["apple", "banana", "apple", "apple"]).await;

        let hits = index.search(&[1.0, 0.0, 0.0], 3);
        let ordinals: Vec<usize> = hits.iter().map(|f| f.ordinal).collect();
        assert_eq!(ordinals, vec![0, 2, 3]);
    }

    #[tokio::test]
    async fn repeated_searches_are_deterministic() {
        let index = build_index(&["apple banana", "banana apple", "cherry", "apple banana"]).await;

        let query = [0.5, 0.5, 0.0];
        let first: Vec<usize> = index.search(&query, 4).iter().map(|f| f.ordinal).collect();
        for _ in 0..10 {
            let again: Vec<usize> = index.search(&query, 4).iter().map(|f| f.ordinal).collect();
            assert_eq!(again, first);
        }
    }

    #[tokio::test]
    async fn growing_k_keeps_the_smaller_result_as_prefix() {
        let index = build_index(&[
            "apple apple",
            "banana banana banana",
            "cherry",
            "apple banana cherry",
            "banana",
        ])
        .await;

        let query = [0.2, 0.7, 0.1];
        let mut previous: Vec<usize> = Vec::new();
        for k in 1..=5 {
            let hits: Vec<usize> = index.search(&query, k).iter().map(|f| f.ordinal).collect();
            assert_eq!(&hits[..previous.len()], previous.as_slice());
            previous = hits;
        }
    }

    #[tokio::test]
    async fn k_larger_than_index_returns_everything() {
        let index = build_index(&["apple", "banana"]).await;
        assert_eq!(index.search(&[1.0, 1.0, 1.0], 10).len(), 2);
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
    }

    #[tokio::test]
    async fn concurrent_build_preserves_fragment_order() {
        let index = build_index(&["apple", "banana", "cherry", "apple banana"]).await;
        let ordinals: Vec<usize> = index.entries.iter().map(|e| e.fragment.ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }
}
