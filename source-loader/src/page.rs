//! Page loader: fetch a URL and extract its visible text.
//!
//! The render wait is bounded by `LoaderConfig::page_timeout_secs` so a page
//! that never settles cannot hang a request. Extraction walks the parsed DOM
//! and skips non-content subtrees (`script`, `style`, `head`, ...), which
//! covers everything a plain fetch can see; a full client-side rendering
//! backend can be swapped in behind the same [`SourceLoader`] trait.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::document::RawDocument;
use crate::errors::LoadError;
use crate::loader::{LoaderConfig, SourceLoader};

/// Loader for generic web pages.
pub struct PageLoader {
    client: reqwest::Client,
    timeout_secs: u64,
}

impl PageLoader {
    /// Builds a page loader with a bounded request timeout.
    ///
    /// # Errors
    /// Returns [`LoadError::Unreachable`] if the HTTP client cannot be built.
    pub fn new(cfg: &LoaderConfig) -> Result<Self, LoadError> {
        let timeout_secs = cfg.page_timeout_secs.max(1);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| LoadError::Unreachable {
                url: String::new(),
                reason: format!("http client build: {e}"),
            })?;
        Ok(Self {
            client,
            timeout_secs,
        })
    }
}

#[async_trait]
impl SourceLoader for PageLoader {
    async fn load(&self, url: &str) -> Result<Vec<RawDocument>, LoadError> {
        debug!(target: "source_loader::page", url, "fetching page");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::from_transport(url, self.timeout_secs, e))?;

        if !resp.status().is_success() {
            return Err(LoadError::Unreachable {
                url: url.to_string(),
                reason: format!("HTTP {}", resp.status()),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::from_transport(url, self.timeout_secs, e))?;

        let (title, text) = extract_text(&body);

        info!(
            target: "source_loader::page",
            url,
            chars = text.len(),
            has_title = title.is_some(),
            "page loaded"
        );

        let mut doc = RawDocument::new(text).with_meta("source", url);
        if let Some(title) = title {
            doc = doc.with_meta("title", title);
        }
        Ok(vec![doc])
    }
}

/// Parses HTML and returns `(title, visible text)`.
///
/// Text nodes are joined with newlines; consecutive whitespace inside a
/// node is collapsed by trimming each node.
fn extract_text(html: &str) -> (Option<String>, String) {
    let doc = Html::parse_document(html);

    let title_sel = Selector::parse("title").expect("valid selector");
    let title = doc
        .select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let mut out = String::new();
    collect_text(*doc.root_element(), &mut out);

    (title, out.trim_end().to_string())
}

/// Subtrees that never contribute visible text.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "head", "template", "svg"];

fn collect_text(node: ego_tree::NodeRef<'_, scraper::Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            scraper::Node::Text(t) => {
                let s = t.trim();
                if !s.is_empty() {
                    out.push_str(s);
                    out.push('\n');
                }
            }
            scraper::Node::Element(el) => {
                if !SKIPPED_TAGS.contains(&el.name()) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}
