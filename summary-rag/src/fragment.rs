//! Fragment model: the unit of embedding and retrieval.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A bounded, overlapping slice of a source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// The fragment text (length bounded by the chunker's `chunk_size`).
    pub text: String,
    /// Metadata inherited from the parent document.
    pub metadata: Map<String, Value>,
    /// Position in the overall chunking order, 0-based and unique across
    /// all documents of one request. Used as the retrieval tie-breaker.
    pub ordinal: usize,
}
