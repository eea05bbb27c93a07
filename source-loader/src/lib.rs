//! Content loading for the summarization pipeline.
//!
//! This crate owns everything that touches the source URL:
//! - [`classify`] decides whether a link points at a video host or a plain page
//! - [`SourceLoader`] is the capability seam the pipeline loads through
//! - [`VideoLoader`] fetches a YouTube caption track plus video metadata
//! - [`PageLoader`] fetches a page and extracts its visible text
//!
//! Loaders are request-scoped: construct one per request, drop it afterwards.

mod classify;
mod document;
mod errors;
mod loader;
mod page;
mod video;

pub use classify::{SourceKind, classify};
pub use document::RawDocument;
pub use errors::LoadError;
pub use loader::{LoaderConfig, SourceLoader, loader_for};
pub use page::PageLoader;
pub use video::VideoLoader;
