//! In-process session store backed by a mutex-guarded hash map.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::TimeDelta;

use homesim_domain::id::SessionId;
use homesim_domain::session::Session;
use homesim_domain::time::now;

use crate::ports::SessionStore;

/// Keeps sessions in memory and ends them after a period of inactivity.
///
/// Expired sessions are evicted lazily whenever the store is accessed, so a
/// visitor returning after the timeout starts over with every device off.
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionId, Session>>,
    idle_timeout: TimeDelta,
}

impl InMemorySessionStore {
    /// Create a store that ends sessions idle for longer than `idle_timeout`.
    #[must_use]
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout: TimeDelta::from_std(idle_timeout).unwrap_or(TimeDelta::MAX),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn evict_expired(&self, sessions: &mut HashMap<SessionId, Session>) {
        let at = now();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(at, self.idle_timeout));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "ended idle sessions");
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, id: SessionId) -> impl Future<Output = Option<Session>> + Send {
        let result = {
            let mut sessions = self.lock();
            self.evict_expired(&mut sessions);
            sessions.get(&id).cloned()
        };
        async { result }
    }

    fn save(&self, session: Session) -> impl Future<Output = ()> + Send {
        {
            let mut sessions = self.lock();
            sessions.insert(session.id, session);
        }
        async {}
    }
}
