use serde::Serialize;

/// Response body for `POST /summarize`.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// The generated summary, verbatim model output.
    pub message: String,
}
