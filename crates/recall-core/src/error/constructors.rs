//! Constructor methods for RecallError

use super::types::RecallError;

impl RecallError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error naming the offending field
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a collaborator error
    pub fn collaborator(collaborator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Collaborator {
            collaborator: collaborator.into(),
            message: message.into(),
        }
    }

    /// Create a new LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            backend: None,
        }
    }

    /// Create an LLM error naming the backend
    pub fn llm_with_backend(message: impl Into<String>, backend: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            backend: Some(backend.into()),
        }
    }

    /// Create an HTTP error
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create an HTTP error with status code
    pub fn http_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Http {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a corrupt session record error
    pub fn corrupt(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            session_id: session_id.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_fills_variant_fields() {
        let err = RecallError::llm_with_backend("timed out", "gemini");
        match err {
            RecallError::Llm { message, backend } => {
                assert_eq!(message, "timed out");
                assert_eq!(backend.as_deref(), Some("gemini"));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn corrupt_is_distinct_from_not_found() {
        let corrupt = RecallError::corrupt("Demo-20250101120000", "bad JSON");
        let missing = RecallError::not_found("session gone");
        assert!(corrupt.is_corrupt());
        assert!(!missing.is_corrupt());
    }

    #[test]
    fn display_includes_message() {
        let err = RecallError::invalid_input_field("Project name is required", "project_name");
        assert!(err.to_string().contains("Project name is required"));
    }
}
