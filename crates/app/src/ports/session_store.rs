//! Session store port — where per-visitor sessions live between requests.

use std::future::Future;

use homesim_domain::id::SessionId;
use homesim_domain::session::Session;

/// Keeps sessions alive between interactions.
///
/// Every session owns its own registry; implementations must never share
/// state between two ids.
pub trait SessionStore {
    /// Fetch a live session, or `None` if it never existed or has ended.
    fn load(&self, id: SessionId) -> impl Future<Output = Option<Session>> + Send;

    /// Insert or replace a session.
    fn save(&self, session: Session) -> impl Future<Output = ()> + Send;
}

impl<T: SessionStore + Send + Sync> SessionStore for std::sync::Arc<T> {
    fn load(&self, id: SessionId) -> impl Future<Output = Option<Session>> + Send {
        (**self).load(id)
    }

    fn save(&self, session: Session) -> impl Future<Output = ()> + Send {
        (**self).save(session)
    }
}
