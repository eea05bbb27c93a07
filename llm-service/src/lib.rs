//! Generation-side LLM client.
//!
//! One provider family is supported: OpenAI-compatible chat completions,
//! which covers Groq (the default deployment target) and OpenAI itself.
//! Configuration is explicit per request (the caller decides where the
//! credential comes from), with env-driven defaults in [`config`].

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::default_config::{SUMMARY_TEMPERATURE, config_groq_summary};
pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::GenerationError;
pub use services::groq_service::GroqService;
