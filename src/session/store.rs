//! In-memory session store
//!
//! Holds the most recent descriptive text returned by the provider for each
//! user. Entries live for the lifetime of the process: there is no
//! persistence, no eviction and no size bound, so memory grows with the
//! number of distinct user ids seen.

use dashmap::DashMap;
use tracing::debug;

/// Conversational memory for a single user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Text part of the last text-bearing provider response
    pub last_response_text: Option<String>,
}

/// Process-wide session store keyed by user id
///
/// # Thread Safety
///
/// Backed by a sharded `DashMap`, so reads and writes for different users
/// only contend when they land on the same shard. Writes replace the whole
/// entry under the shard lock, so readers never observe a partial update.
/// Concurrent writes for the same user are last-write-wins.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Last response text for a user, if any
    pub fn get(&self, user_id: &str) -> Option<String> {
        self.sessions
            .get(user_id)
            .and_then(|session| session.last_response_text.clone())
    }

    /// Full session for a user, if one was ever created
    pub fn session(&self, user_id: &str) -> Option<Session> {
        self.sessions.get(user_id).map(|session| session.clone())
    }

    /// Replace the stored text for a user, creating the session if needed
    pub fn set(&self, user_id: &str, text: impl Into<String>) {
        let text = text.into();
        debug!(user_id = %user_id, text_len = text.len(), "Updating session text");
        self.sessions.insert(
            user_id.to_string(),
            Session {
                last_response_text: Some(text),
            },
        );
    }

    /// Number of users with a session
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session has been created yet
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
