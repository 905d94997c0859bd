//! Recall core library
//!
//! This crate provides the core functionality for the recall assistant:
//! context capture and sanitization, LLM-backed summarization, session
//! persistence, and the pause/resume pipeline that ties them together.

pub mod capture;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod session;
pub mod summarize;

// Re-export commonly used types
pub use capture::{ChannelMessage, MessageFetcher, RawContext, SanitizeRules, WindowLister};
pub use config::Config;
pub use error::{RecallError, RecallResult};
pub use llm::LlmClient;
pub use pipeline::{PauseOutcome, PauseRequest, Pipeline};
pub use session::{ContextSnapshot, FileSessionStore, MemorySessionStore, SessionId, SessionStore};
pub use summarize::Summarizer;
