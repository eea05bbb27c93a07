//! Overlapping character chunker.
//!
//! Documents are cut into windows of at most `chunk_size` characters.
//! Cuts prefer, in order: paragraph break, line break, sentence end, word
//! boundary; when none falls in the second half of the window, the cut is a
//! hard one at `chunk_size`. Each window starts `overlap` characters before
//! the previous window's cut, so context spanning a boundary is present in
//! both fragments. Windows advance at a fixed stride when the document tail
//! is shorter than a full window, so every span of the input is covered and
//! no text is dropped.

use serde_json::{Map, Value};
use source_loader::RawDocument;
use tracing::debug;

use crate::fragment::Fragment;

/// Chunking parameters, in characters.
#[derive(Debug, Clone, Copy)]
pub struct ChunkConfig {
    /// Upper bound on fragment length.
    pub chunk_size: usize,
    /// Shared span between consecutive fragments of one document.
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
        }
    }
}

/// Splits every document into ordered, overlapping fragments.
///
/// Deterministic for identical input and config. Fragment ordinals are
/// assigned globally across documents, in document order. Documents with
/// empty text produce no fragments.
pub fn split_documents(docs: &[RawDocument], cfg: ChunkConfig) -> Vec<Fragment> {
    let mut out = Vec::new();
    let mut ordinal = 0usize;

    for doc in docs {
        let pieces = split_text(&doc.text, cfg);
        debug!(
            target: "summary_rag::chunker",
            doc_chars = doc.text.chars().count(),
            fragments = pieces.len(),
            "document chunked"
        );
        for text in pieces {
            out.push(Fragment {
                text,
                metadata: clone_metadata(&doc.metadata),
                ordinal,
            });
            ordinal += 1;
        }
    }

    out
}

fn clone_metadata(meta: &Map<String, Value>) -> Map<String, Value> {
    meta.clone()
}

/// Splits one text into overlapping windows of at most `chunk_size` chars.
fn split_text(text: &str, cfg: ChunkConfig) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if len == 0 {
        return Vec::new();
    }

    let chunk = cfg.chunk_size.max(1);
    // Overlap must leave room for forward progress.
    let overlap = cfg.overlap.min(chunk.saturating_sub(1));
    let stride = chunk - overlap;

    let mut out = Vec::new();
    let mut start = 0usize;

    while start < len {
        let hard_end = start + chunk;
        let (end, next) = if hard_end >= len {
            // Tail window: take everything, keep the stride so trailing
            // content still gets a window that starts inside it.
            (len, start + stride)
        } else {
            let e = boundary_cut(&chars, start, hard_end);
            (e, (e.saturating_sub(overlap)).max(start + 1))
        };

        out.push(chars[start..end].iter().collect());
        start = next;
    }

    out
}

/// Finds the best cut position in `(mid..=hard_end]`, preferring paragraph
/// over line over sentence over word boundaries. Falls back to `hard_end`.
fn boundary_cut(chars: &[char], start: usize, hard_end: usize) -> usize {
    // Only accept boundary cuts in the second half of the window; a cut
    // earlier than that loses too much of the size budget.
    let lo = start + (hard_end - start) / 2 + 1;

    type Pred = fn(&[char], usize) -> bool;
    let preds: [Pred; 4] = [ends_paragraph, ends_line, ends_sentence, ends_word];

    for pred in preds {
        for e in (lo..=hard_end).rev() {
            if pred(chars, e) {
                return e;
            }
        }
    }
    hard_end
}

fn ends_paragraph(chars: &[char], e: usize) -> bool {
    e >= 2 && chars[e - 1] == '\n' && chars[e - 2] == '\n'
}

fn ends_line(chars: &[char], e: usize) -> bool {
    e >= 1 && chars[e - 1] == '\n'
}

fn ends_sentence(chars: &[char], e: usize) -> bool {
    e >= 2 && matches!(chars[e - 2], '.' | '!' | '?') && chars[e - 1].is_whitespace()
}

fn ends_word(chars: &[char], e: usize) -> bool {
    e >= 1 && chars[e - 1].is_whitespace()
}
