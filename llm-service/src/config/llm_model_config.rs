use crate::config::llm_provider::LlmProvider;

/// Configuration for one model invocation.
///
/// Built per request: the summarization endpoint resolves the credential
/// (request override first, process default second) and hands the finished
/// config to the service constructor.
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Which chat-completion backend to use.
    pub provider: LlmProvider,

    /// Model identifier string (e.g. `"llama-3.3-70b-versatile"`).
    pub model: String,

    /// API base, e.g. `https://api.groq.com/openai`.
    pub endpoint: String,

    /// Bearer credential; required by both supported providers.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature. The summary pipeline pins this low (0.1) to
    /// favor factual, repeatable output.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}
