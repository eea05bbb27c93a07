//! Summary prompt assembly.

use summary_rag::Fragment;

/// Fixed summary prompt. `{context}` is replaced with the retrieved
/// fragments joined by blank lines, in retrieval order.
pub const SUMMARY_TEMPLATE: &str = "\
You are an expert in summarizing content from various sources, including YouTube videos and web pages.
Your goal is to create a summary of the provided content.
Below you find the content (transcript of a video or content of a web page):
--------
{context}
--------
The result should be a summary, highlighting the main themes and details presented in the content.

SUMMARY:";

/// Renders [`SUMMARY_TEMPLATE`] with the given fragments as context.
pub fn build_summary_prompt(fragments: &[&Fragment]) -> String {
    let context = fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    SUMMARY_TEMPLATE.replace("{context}", &context)
}
