//! In-memory per-user session lists.

use dashmap::DashMap;
use tracing::debug;

use pulse_core::types::UserId;
use pulse_entity::session::Session;

/// Holds, per user, the ordered-by-insertion list of login/logout
/// intervals.
///
/// Appends are unconditional: no temporal validation happens here, and a
/// user need not be registered to have sessions recorded. The per-entry
/// lock covers the whole append, so concurrent writers to one user's
/// list cannot lose sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<UserId, Vec<Session>>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a session to the user's list, creating it on first use.
    pub fn record(&self, id: UserId, session: Session) {
        self.sessions.entry(id).or_default().push(session);
        debug!("session recorded");
    }

    /// The user's sessions in insertion order; empty when none recorded.
    pub fn sessions_for(&self, id: &UserId) -> Vec<Session> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Whether the user has at least one recorded session.
    pub fn has_sessions(&self, id: &UserId) -> bool {
        self.sessions
            .get(id)
            .map(|entry| !entry.value().is_empty())
            .unwrap_or(false)
    }
}
