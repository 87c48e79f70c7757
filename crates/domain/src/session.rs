//! Session — one visitor's isolated dashboard state.

use serde::Serialize;

use crate::id::SessionId;
use crate::registry::DeviceRegistry;
use crate::time::{Timestamp, now};

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Stable lowercase name, used as a CSS class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A one-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Per-visitor state: the device registry plus a pending notice.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub registry: DeviceRegistry,
    pub notice: Option<Notice>,
    pub last_seen: Timestamp,
}

impl Session {
    /// Start a session with a freshly initialized registry.
    #[must_use]
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            registry: DeviceRegistry::new(),
            notice: None,
            last_seen: now(),
        }
    }

    /// Return the session held in `slot`, creating it with every device off
    /// on first use.
    ///
    /// Calling this again for the same slot leaves existing state untouched.
    pub fn initialize(slot: &mut Option<Self>, id: SessionId) -> &mut Self {
        slot.get_or_insert_with(|| Self::new(id))
    }

    /// Record activity.
    pub fn touch(&mut self) {
        self.last_seen = now();
    }

    /// Whether the session has been idle for longer than `ttl`.
    #[must_use]
    pub fn is_expired(&self, at: Timestamp, ttl: chrono::TimeDelta) -> bool {
        at.signed_duration_since(self.last_seen) > ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::WATER_PUMP;
    use chrono::TimeDelta;

    #[test]
    fn should_start_with_all_devices_off_and_no_notice() {
        let session = Session::new(SessionId::new());
        assert_eq!(session.registry.powered_count(), 0);
        assert!(session.notice.is_none());
    }

    #[test]
    fn should_preserve_state_when_initialized_twice() {
        let id = SessionId::new();
        let mut slot = None;
        Session::initialize(&mut slot, id)
            .registry
            .set(WATER_PUMP, true)
            .unwrap();

        let session = Session::initialize(&mut slot, id);
        assert!(session.registry.get(WATER_PUMP).unwrap());
        assert_eq!(session.id, id);
    }

    #[test]
    fn should_expire_after_idle_timeout() {
        let mut session = Session::new(SessionId::new());
        session.last_seen = now() - TimeDelta::minutes(31);
        assert!(session.is_expired(now(), TimeDelta::minutes(30)));
    }

    #[test]
    fn should_not_expire_while_active() {
        let session = Session::new(SessionId::new());
        assert!(!session.is_expired(now(), TimeDelta::minutes(30)));
    }

    #[test]
    fn should_build_notices_with_matching_level() {
        assert_eq!(Notice::success("ok").level, NoticeLevel::Success);
        assert_eq!(Notice::warning("hm").level, NoticeLevel::Warning);
        assert_eq!(Notice::error("no").level.as_str(), "error");
    }
}
