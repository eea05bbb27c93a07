/// The chat-completion backend behind [`crate::GroqService`].
///
/// Both speak the OpenAI chat-completions wire format; the variant mostly
/// documents which deployment the config was built for and lets the
/// constructor validate the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// Groq cloud API (the default summary backend).
    Groq,
    /// OpenAI or any other OpenAI-compatible endpoint.
    OpenAiCompatible,
}
