//! Mutable slot adapter around the pure transition functions.
//!
//! The core never mutates a session in place; this store owns the single
//! mutable slot per workspace and installs returned snapshots atomically.
//! Installation is skipped when a transition returns the same handle, so the
//! identity no-ops of the core translate directly into skipped re-renders.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

use crate::session::{Session, SessionRef};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),
}

/// Holds one session snapshot per workspace.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionRef>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a session, returning the shared handle now stored.
    pub fn insert(&self, session: Session) -> SessionRef {
        let handle = Arc::new(session);
        self.sessions.write().insert(handle.id, Arc::clone(&handle));
        handle
    }

    /// Current snapshot for a workspace session.
    pub fn get(&self, id: &Uuid) -> Option<SessionRef> {
        self.sessions.read().get(id).cloned()
    }

    pub fn remove(&self, id: &Uuid) -> Option<SessionRef> {
        self.sessions.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Run a transition against the current snapshot and install the result.
    ///
    /// Returns `Ok(true)` when a new snapshot was installed, `Ok(false)` when
    /// the transition declined (`None`) or returned the same handle.
    pub fn apply<F>(&self, id: &Uuid, transition: F) -> Result<bool, StoreError>
    where
        F: FnOnce(&SessionRef) -> Option<SessionRef>,
    {
        let mut sessions = self.sessions.write();
        let current = sessions.get(id).ok_or(StoreError::SessionNotFound(*id))?;

        match transition(current) {
            Some(next) if !Arc::ptr_eq(current, &next) => {
                sessions.insert(*id, next);
                tracing::debug!(session_id = %id, "installed session snapshot");
                Ok(true)
            }
            Some(_) => {
                tracing::debug!(session_id = %id, "transition was an identity no-op");
                Ok(false)
            }
            None => Ok(false),
        }
    }
}
