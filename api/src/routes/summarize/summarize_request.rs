use serde::Deserialize;

/// Request body for `POST /summarize`.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// URL of the source to summarize (web page or YouTube video).
    pub link: String,
    /// Optional model credential; overrides the server-side `GROQ_API_KEY`.
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_uses_the_camel_case_wire_name() {
        let req: SummarizeRequest =
            serde_json::from_str(r#"{"link":"https://example.com","apiKey":"k"}"#).unwrap();
        assert_eq!(req.link, "https://example.com");
        assert_eq!(req.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn api_key_is_optional() {
        let req: SummarizeRequest = serde_json::from_str(r#"{"link":"https://example.com"}"#).unwrap();
        assert!(req.api_key.is_none());
    }
}
