//! Application state: the dialogue script and the live session registry.
//!
//! Sessions exist only in memory. Mounting a panel creates one; unmounting
//! shuts it down (canceling outstanding timers) and forgets it. Nothing
//! survives process restart.

use std::sync::Arc;

use dashmap::DashMap;

use parley_core::reply::CannedReplies;
use parley_core::session::DialogueSession;
use parley_types::error::ScriptError;
use parley_types::script::DialogueScript;
use parley_types::session::SessionId;

/// Concrete session type with the canned reply strategy pinned.
pub type ConcreteSession = DialogueSession<CannedReplies>;

/// Shared application state holding the script and the session registry.
#[derive(Clone)]
pub struct AppState {
    pub script: Arc<DialogueScript>,
    pub sessions: Arc<DashMap<SessionId, Arc<ConcreteSession>>>,
}

impl AppState {
    /// Build state around a validated script.
    pub fn new(script: DialogueScript) -> Result<Self, ScriptError> {
        script.validate()?;
        Ok(Self {
            script: Arc::new(script),
            sessions: Arc::new(DashMap::new()),
        })
    }

    /// Mount a new panel session and register it.
    pub fn create_session(&self) -> Result<Arc<ConcreteSession>, ScriptError> {
        let replies = CannedReplies::from_script(&self.script)?;
        let session = Arc::new(DialogueSession::new(Arc::clone(&self.script), replies)?);
        self.sessions.insert(session.id(), Arc::clone(&session));
        Ok(session)
    }

    /// Look up a live session.
    pub fn get_session(&self, id: &SessionId) -> Option<Arc<ConcreteSession>> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Unmount a session: cancel its outstanding timers and forget it.
    ///
    /// Returns whether a session was actually removed.
    pub fn remove_session(&self, id: &SessionId) -> bool {
        match self.sessions.remove(id) {
            Some((_, session)) => {
                session.shutdown();
                tracing::info!(session_id = %id, "session unmounted");
                true
            }
            None => false,
        }
    }
}
