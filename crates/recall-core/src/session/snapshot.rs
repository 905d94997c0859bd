//! Session snapshot types and ID generation

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Session identifier: `<project>-<YYYYMMDDHHMMSS>`, also the file stem.
pub type SessionId = String;

/// The compacted state stored when a task is paused.
///
/// This is exactly what lands in the session file; resuming reads it
/// back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    /// User-supplied project name
    pub project_name: String,
    /// Local wall-clock time of the pause, RFC 3339
    pub timestamp: String,
    /// The next step the user typed (or accepted from a suggestion)
    pub user_next_step: String,
    /// The recall note produced by the summarization gateway
    pub compacted_summary: String,
}

impl ContextSnapshot {
    /// Build a snapshot stamped with the current local time.
    pub fn new(
        project_name: impl Into<String>,
        user_next_step: impl Into<String>,
        compacted_summary: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            timestamp: Local::now().to_rfc3339(),
            user_next_step: user_next_step.into(),
            compacted_summary: compacted_summary.into(),
        }
    }
}

/// Listing entry: a stored snapshot plus the ID it is filed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub project_name: String,
    pub timestamp: String,
    pub user_next_step: String,
}

impl SessionSummary {
    pub fn from_snapshot(id: SessionId, snapshot: &ContextSnapshot) -> Self {
        Self {
            id,
            project_name: snapshot.project_name.clone(),
            timestamp: snapshot.timestamp.clone(),
            user_next_step: snapshot.user_next_step.clone(),
        }
    }
}

/// Session ID for a project paused at the given instant.
pub fn session_id_for(project_name: &str, when: &DateTime<Local>) -> SessionId {
    format!("{}-{}", project_name, when.format("%Y%m%d%H%M%S"))
}

/// Session ID for a project paused right now.
pub fn new_session_id(project_name: &str) -> SessionId {
    session_id_for(project_name, &Local::now())
}
