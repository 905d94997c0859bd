//! Session storage backends
//!
//! One snapshot per file, the session ID as the file stem. A file-based
//! backend covers normal use; the in-memory backend backs tests and
//! throwaway runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::snapshot::{ContextSnapshot, SessionId, SessionSummary};
use crate::error::{RecallError, RecallResult};

/// Session storage trait
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a snapshot under the given ID
    async fn save(&self, id: &SessionId, snapshot: &ContextSnapshot) -> RecallResult<()>;

    /// Load a snapshot by ID
    async fn load(&self, id: &SessionId) -> RecallResult<Option<ContextSnapshot>>;

    /// Delete a stored snapshot
    async fn delete(&self, id: &SessionId) -> RecallResult<()>;

    /// List stored sessions, most recent first
    async fn list(&self) -> RecallResult<Vec<SessionSummary>>;

    /// Check whether a session exists
    async fn exists(&self, id: &SessionId) -> RecallResult<bool>;
}

/// File-based session storage
pub struct FileSessionStore {
    /// Base directory for session files
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file-based session store
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Get the file path for a session
    fn session_path(&self, id: &SessionId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    /// Ensure the storage directory exists
    async fn ensure_dir(&self) -> RecallResult<()> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path).await.map_err(|e| {
                RecallError::io_with_path(
                    format!("failed to create session directory: {}", e),
                    self.base_path.display().to_string(),
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, id: &SessionId, snapshot: &ContextSnapshot) -> RecallResult<()> {
        self.ensure_dir().await?;

        let path = self.session_path(id);
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| RecallError::json(format!("failed to serialize session: {}", e)))?;

        fs::write(&path, json).await.map_err(|e| {
            RecallError::io_with_path(
                format!("failed to write session file: {}", e),
                path.display().to_string(),
            )
        })?;

        debug!("saved session {} to {:?}", id, path);
        Ok(())
    }

    async fn load(&self, id: &SessionId) -> RecallResult<Option<ContextSnapshot>> {
        let path = self.session_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).await.map_err(|e| {
            RecallError::io_with_path(
                format!("failed to read session file: {}", e),
                path.display().to_string(),
            )
        })?;

        let snapshot: ContextSnapshot = serde_json::from_str(&json)
            .map_err(|e| RecallError::corrupt(id.clone(), e.to_string()))?;

        debug!("loaded session {} from {:?}", id, path);
        Ok(Some(snapshot))
    }

    async fn delete(&self, id: &SessionId) -> RecallResult<()> {
        let path = self.session_path(id);

        if path.exists() {
            fs::remove_file(&path).await.map_err(|e| {
                RecallError::io_with_path(
                    format!("failed to delete session file: {}", e),
                    path.display().to_string(),
                )
            })?;
            info!("deleted session {} from {:?}", id, path);
        } else {
            warn!("session {} not found at {:?}", id, path);
        }

        Ok(())
    }

    async fn list(&self) -> RecallResult<Vec<SessionSummary>> {
        self.ensure_dir().await?;

        let mut summaries = Vec::new();
        let mut entries = fs::read_dir(&self.base_path).await.map_err(|e| {
            RecallError::io_with_path(
                format!("failed to read session directory: {}", e),
                self.base_path.display().to_string(),
            )
        })?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RecallError::io(format!("failed to read directory entry: {}", e)))?
        {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    let id = stem.to_string_lossy().to_string();
                    match self.load(&id).await {
                        Ok(Some(snapshot)) => {
                            summaries.push(SessionSummary::from_snapshot(id, &snapshot));
                        }
                        Ok(None) => {
                            warn!("session file vanished while listing: {:?}", path);
                        }
                        Err(e) => {
                            warn!("skipping unreadable session {:?}: {}", path, e);
                        }
                    }
                }
            }
        }

        // Most recent first; RFC 3339 timestamps sort lexically
        summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(summaries)
    }

    async fn exists(&self, id: &SessionId) -> RecallResult<bool> {
        Ok(self.session_path(id).exists())
    }
}

/// In-memory session storage, for tests and throwaway runs
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, ContextSnapshot>>>,
}

impl MemorySessionStore {
    /// Create a new in-memory session store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, id: &SessionId, snapshot: &ContextSnapshot) -> RecallResult<()> {
        self.sessions
            .write()
            .await
            .insert(id.clone(), snapshot.clone());
        Ok(())
    }

    async fn load(&self, id: &SessionId) -> RecallResult<Option<ContextSnapshot>> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> RecallResult<()> {
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn list(&self) -> RecallResult<Vec<SessionSummary>> {
        let sessions = self.sessions.read().await;
        let mut summaries: Vec<SessionSummary> = sessions
            .iter()
            .map(|(id, snapshot)| SessionSummary::from_snapshot(id.clone(), snapshot))
            .collect();

        summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(summaries)
    }

    async fn exists(&self, id: &SessionId) -> RecallResult<bool> {
        Ok(self.sessions.read().await.contains_key(id))
    }
}
