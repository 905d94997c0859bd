//! Captured context types

use serde::{Deserialize, Serialize};

/// A message as returned by the channel API, before sanitization.
///
/// Slack history entries do not always carry every field (bot posts,
/// deleted-message tombstones, subtype records), so everything is
/// optional here. The sanitizer decides what survives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMessage {
    /// Sender user ID
    pub user: Option<String>,
    /// Message body
    pub text: Option<String>,
    /// Channel timestamp ("1727712345.000200")
    pub ts: Option<String>,
}

impl RawMessage {
    /// Convenience constructor for a fully populated message.
    pub fn new(
        user: impl Into<String>,
        text: impl Into<String>,
        ts: impl Into<String>,
    ) -> Self {
        Self {
            user: Some(user.into()),
            text: Some(text.into()),
            ts: Some(ts.into()),
        }
    }
}

/// A sanitized channel message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMessage {
    /// Sender user ID
    pub user_id: String,
    /// Message body
    pub text: String,
    /// Channel timestamp, kept as the API's string form
    pub timestamp: String,
}

/// The sanitized context snapshot handed to the summarization gateway.
///
/// `active_windows` and `slack_messages` are always present (possibly
/// empty); ordering matches what the collaborators returned, newest-first
/// for messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContext {
    /// User-supplied project name
    pub project_name: String,
    /// Window titles, enumeration order, duplicates removed upstream
    pub active_windows: Vec<String>,
    /// Recent channel messages, newest first
    pub slack_messages: Vec<ChannelMessage>,
}

impl RawContext {
    /// Create an empty context for a project.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            active_windows: Vec::new(),
            slack_messages: Vec::new(),
        }
    }

    /// Pretty-printed JSON form, as embedded into model prompts.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
