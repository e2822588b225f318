use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::Session;

// Holding the lock for a whole turn keeps two requests on one session from
// interleaving.
pub type SessionHandle = Arc<tokio::sync::Mutex<Session>>;

pub trait SessionStore: Send + Sync {
    fn get(&self, id: &str) -> Option<SessionHandle>;

    fn create(&self) -> SessionHandle;

    fn delete(&self, id: &str) -> bool;
}

#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionHandle>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &str) -> Option<SessionHandle> {
        let sessions = self.sessions.lock().ok()?;
        sessions.get(id).cloned()
    }

    fn create(&self) -> SessionHandle {
        let id = uuid::Uuid::new_v4().to_string();
        let handle = Arc::new(tokio::sync::Mutex::new(Session::new(id.clone())));
        match self.sessions.lock() {
            Ok(mut sessions) => {
                sessions.insert(id, Arc::clone(&handle));
            }
            Err(_) => tracing::error!(session_id = %id, "session map lock poisoned, session not stored"),
        }
        handle
    }

    fn delete(&self, id: &str) -> bool {
        self.sessions
            .lock()
            .map(|mut s| s.remove(id).is_some())
            .unwrap_or(false)
    }
}
