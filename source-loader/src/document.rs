//! Raw document model produced by loaders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One logical unit of loaded content (a page body, a video transcript).
///
/// Immutable once produced by a loader; the chunker propagates `metadata`
/// to every fragment it cuts from `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Full extracted text of the source.
    pub text: String,
    /// Arbitrary per-source fields (title, source URL, author, ...).
    pub metadata: Map<String, Value>,
}

impl RawDocument {
    /// Creates a document with empty metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Map::new(),
        }
    }

    /// Adds a metadata entry, builder style.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
