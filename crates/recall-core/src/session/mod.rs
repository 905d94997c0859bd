//! Session snapshots and persistence

mod snapshot;
mod store;

pub use snapshot::{ContextSnapshot, SessionId, SessionSummary, new_session_id, session_id_for};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
