//! Context sanitization
//!
//! Pure, order-preserving, removal-only filtering of captured data before
//! it reaches a language model. Two concerns: desktop chrome and launcher
//! noise that says nothing about the user's work, and window titles that
//! look like they name a credential. The keyword match is a best-effort
//! heuristic for reducing accidental leakage, not a security boundary.

use crate::capture::types::{ChannelMessage, RawContext, RawMessage};
use serde::{Deserialize, Serialize};

/// Channel-membership notices dropped from message history.
const MEMBERSHIP_NOTICES: [&str; 2] = ["has joined the channel", "has left the channel"];

/// Keyword lists applied when sanitizing captured context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeRules {
    /// Titles containing any of these substrings are dropped (case-sensitive)
    pub irrelevant_keywords: Vec<String>,
    /// Titles containing any of these substrings are dropped (case-insensitive)
    pub sensitive_keywords: Vec<String>,
}

impl Default for SanitizeRules {
    fn default() -> Self {
        Self {
            irrelevant_keywords: [
                "Windows Input Experience",
                "PopupHost",
                "File Explorer",
                "Program Manager",
                "Taskbar",
                "Cortana",
                "Running applications",
                "Windows Security",
                "Calculator",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            sensitive_keywords: [
                "password",
                "passwd",
                "secret",
                "token",
                "credential",
                "api key",
                "apikey",
                "private key",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl SanitizeRules {
    /// Sanitize a full capture into the context handed to the gateway.
    ///
    /// Never fails; filtering is best-effort and only removes entries.
    pub fn sanitize(
        &self,
        project_name: impl Into<String>,
        windows: Vec<String>,
        messages: Vec<RawMessage>,
    ) -> RawContext {
        RawContext {
            project_name: project_name.into(),
            active_windows: self.filter_windows(windows),
            slack_messages: self.filter_messages(messages),
        }
    }

    /// Drop window titles that match the irrelevant or sensitive lists.
    pub fn filter_windows(&self, windows: Vec<String>) -> Vec<String> {
        windows
            .into_iter()
            .filter(|title| !self.is_irrelevant(title) && !self.looks_sensitive(title))
            .collect()
    }

    /// Drop membership notices and skip malformed records.
    ///
    /// A record without a sender or a body (deleted messages, odd
    /// subtypes) is skipped rather than treated as an error.
    pub fn filter_messages(&self, messages: Vec<RawMessage>) -> Vec<ChannelMessage> {
        messages
            .into_iter()
            .filter_map(|msg| {
                let user_id = msg.user?;
                let text = msg.text?;
                if MEMBERSHIP_NOTICES
                    .iter()
                    .any(|notice| text.contains(notice))
                {
                    return None;
                }
                Some(ChannelMessage {
                    user_id,
                    text,
                    timestamp: msg.ts.unwrap_or_default(),
                })
            })
            .collect()
    }

    fn is_irrelevant(&self, title: &str) -> bool {
        self.irrelevant_keywords
            .iter()
            .any(|keyword| title.contains(keyword))
    }

    fn looks_sensitive(&self, title: &str) -> bool {
        let lowered = title.to_lowercase();
        self.sensitive_keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> SanitizeRules {
        SanitizeRules::default()
    }

    #[test]
    fn membership_notices_are_dropped_and_order_is_preserved() {
        let messages = vec![
            RawMessage::new("U1", "first message", "3.0"),
            RawMessage::new("USLACKBOT", "@alice has joined the channel", "2.0"),
            RawMessage::new("U2", "second message", "1.0"),
        ];

        let cleaned = rules().filter_messages(messages);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].text, "first message");
        assert_eq!(cleaned[1].text, "second message");
    }

    #[test]
    fn leave_notices_are_dropped_too() {
        let messages = vec![RawMessage::new("USLACKBOT", "@bob has left the channel", "1.0")];
        assert!(rules().filter_messages(messages).is_empty());
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let messages = vec![
            RawMessage {
                user: Some("U1".to_string()),
                text: None,
                ts: Some("3.0".to_string()),
            },
            RawMessage {
                user: None,
                text: Some("orphaned".to_string()),
                ts: None,
            },
            RawMessage::new("U2", "kept", "1.0"),
        ];

        let cleaned = rules().filter_messages(messages);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].user_id, "U2");
    }

    #[test]
    fn missing_timestamp_defaults_to_empty() {
        let messages = vec![RawMessage {
            user: Some("U1".to_string()),
            text: Some("no ts".to_string()),
            ts: None,
        }];
        let cleaned = rules().filter_messages(messages);
        assert_eq!(cleaned[0].timestamp, "");
    }

    #[test]
    fn irrelevant_titles_are_dropped_exactly() {
        let windows = vec![
            "Editor — file.py".to_string(),
            "PopupHost".to_string(),
            "main.rs — recall — VS Code".to_string(),
            "File Explorer".to_string(),
        ];

        let cleaned = rules().filter_windows(windows);
        assert_eq!(
            cleaned,
            vec![
                "Editor — file.py".to_string(),
                "main.rs — recall — VS Code".to_string(),
            ]
        );
    }

    #[test]
    fn sensitive_titles_match_case_insensitively() {
        let windows = vec![
            "Passwords.kdbx — KeePassXC".to_string(),
            "API Key rotation runbook — Notion".to_string(),
            "design-notes.md".to_string(),
        ];

        let cleaned = rules().filter_windows(windows);
        assert_eq!(cleaned, vec!["design-notes.md".to_string()]);
    }

    #[test]
    fn sanitize_assembles_a_full_context() {
        let context = rules().sanitize(
            "Demo",
            vec!["Editor — file.py".to_string(), "PopupHost".to_string()],
            vec![
                RawMessage::new("U1", "hello", "2.0"),
                RawMessage::new("USLACKBOT", "@eve has joined the channel", "1.0"),
            ],
        );

        assert_eq!(context.project_name, "Demo");
        assert_eq!(context.active_windows, vec!["Editor — file.py".to_string()]);
        assert_eq!(context.slack_messages.len(), 1);
        assert_eq!(context.slack_messages[0].text, "hello");
    }

    #[test]
    fn custom_rules_replace_the_defaults() {
        let rules = SanitizeRules {
            irrelevant_keywords: vec!["Scratchpad".to_string()],
            sensitive_keywords: vec![],
        };

        let cleaned = rules.filter_windows(vec![
            "Scratchpad — notes".to_string(),
            "PopupHost".to_string(),
        ]);
        // Only the custom keyword applies; the default lists are gone.
        assert_eq!(cleaned, vec!["PopupHost".to_string()]);
    }
}
