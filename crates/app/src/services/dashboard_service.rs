//! Dashboard service — use-cases behind the interactive controls.

use homesim_domain::error::HomeSimError;
use homesim_domain::id::SessionId;
use homesim_domain::session::{Notice, Session};

use crate::ports::SessionStore;

/// Application service for session-scoped device control.
///
/// Each call re-initializes-or-reuses the caller's session, applies at most
/// one write, and persists the result before returning.
pub struct DashboardService<S> {
    store: S,
}

impl<S: SessionStore + Send + Sync> DashboardService<S> {
    /// Create a new service backed by the given session store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the session, creating it with every device off on first use.
    ///
    /// Opening an existing session never resets its registry.
    #[tracing::instrument(skip(self))]
    pub async fn open(&self, id: SessionId) -> Session {
        let mut slot = self.store.load(id).await;
        if slot.is_none() {
            tracing::info!(session_id = %id, "session started");
        }
        let session = Session::initialize(&mut slot, id);
        session.touch();
        self.store.save(session.clone()).await;
        session.clone()
    }

    /// Switch one device on or off.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::NotFound`] when `name` is not a registered
    /// device; the session is left unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn set_power(
        &self,
        id: SessionId,
        name: &str,
        powered: bool,
    ) -> Result<Session, HomeSimError> {
        let mut session = self.open(id).await;
        session.registry.set(name, powered)?;
        tracing::info!(device = name, powered, "device switched");
        self.store.save(session.clone()).await;
        Ok(session)
    }

    /// Queue a notice for the next page render.
    pub async fn post_notice(&self, id: SessionId, notice: Notice) {
        let mut session = self.open(id).await;
        session.notice = Some(notice);
        self.store.save(session).await;
    }

    /// Remove and return the pending notice, if any.
    pub async fn take_notice(&self, id: SessionId) -> Option<Notice> {
        let mut session = self.store.load(id).await?;
        let notice = session.notice.take();
        if notice.is_some() {
            self.store.save(session).await;
        }
        notice
    }
}
