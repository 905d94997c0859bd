//! Language model access
//!
//! A small generation layer over two backends: the hosted Gemini API and
//! a local Ollama server. Both sit behind [`LlmBackend`] so higher layers
//! never depend on which one is configured.

mod backends;
mod client;
mod types;

pub use backends::{BackendInstance, GeminiBackend, LlmBackend, OllamaBackend};
pub use client::LlmClient;
pub use types::{BackendKind, DecodingOptions, GenerationRequest};
