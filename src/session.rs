// SPDX-License-Identifier: MIT

//! Server-side session store keyed by an opaque cookie identifier.
//!
//! Sessions live for process uptime only; there is no persistence.

use dashmap::DashMap;
use ring::rand::{SecureRandom, SystemRandom};

use crate::error::AppError;
use crate::models::User;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "toptracks_session";

/// Keyed session storage, injected into route handlers.
pub trait SessionStore: Send + Sync {
    /// Look up the user for a session identifier.
    fn get(&self, session_id: &str) -> Option<User>;
    /// Associate a user with a session identifier.
    fn set(&self, session_id: &str, user: User);
    /// Drop a session.
    fn clear(&self, session_id: &str);
}

/// In-memory session store backed by a concurrent map.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, User>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, session_id: &str) -> Option<User> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    fn set(&self, session_id: &str, user: User) {
        self.sessions.insert(session_id.to_string(), user);
    }

    fn clear(&self, session_id: &str) {
        self.sessions.remove(session_id);
    }
}

/// Generate an unguessable session identifier (32 random bytes, hex).
pub fn new_session_id() -> Result<String, AppError> {
    let rng = SystemRandom::new();
    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Session ID generation failed")))?;
    Ok(hex::encode(bytes))
}
