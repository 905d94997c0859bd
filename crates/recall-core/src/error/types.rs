//! Core error types for recall

use thiserror::Error;

/// Result type alias for recall operations
pub type RecallResult<T> = Result<T, RecallError>;

/// Main error type for recall
///
/// Each variant includes contextual information where relevant. Variants
/// map to the failure classes of the system: configuration, pre-flight
/// validation, collaborator (window/chat) failures, LLM and HTTP errors,
/// storage I/O, corrupt session records, and missing sessions.
#[derive(Error, Debug, Clone)]
pub enum RecallError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Pre-flight input validation errors (empty project name, empty next step)
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// A capture collaborator (window lister, chat fetcher) failed
    #[error("Collaborator error: {collaborator}: {message}")]
    Collaborator {
        collaborator: String,
        message: String,
    },

    /// LLM backend errors
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        backend: Option<String>,
    },

    /// HTTP request errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Session storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// A stored session file exists but cannot be deserialized
    #[error("Corrupt session record: {session_id}: {message}")]
    Corrupt {
        session_id: String,
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Generic error
    #[error("Error: {message}")]
    Other { message: String },
}

impl RecallError {
    /// Whether this error names a corrupt stored record.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
