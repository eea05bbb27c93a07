//! Request-scoped RAG primitives.
//!
//! This crate provides the middle of the summarization pipeline:
//! - [`split_documents`] cuts raw documents into overlapping [`Fragment`]s
//! - [`VectorIndex`] embeds fragments and holds the (fragment, vector)
//!   pairs in memory for the lifetime of one request
//! - [`Retriever`] runs the fixed summary query against the index
//!
//! Nothing here persists: the index is write-once, read-many, and dropped
//! with the request.

mod chunker;
pub mod embed;
mod errors;
mod fragment;
mod index;
mod retriever;

pub use chunker::{ChunkConfig, split_documents};
pub use embed::EmbeddingsProvider;
pub use errors::EmbeddingError;
pub use fragment::Fragment;
pub use index::{IndexEntry, VectorIndex};
pub use retriever::{Retriever, SUMMARY_QUERY};
