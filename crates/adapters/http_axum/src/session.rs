//! Visitor sessions carried in a cookie.
//!
//! A request without a valid `homesim_session` cookie is assigned a fresh
//! session id; the response for that request sets the cookie so the next
//! interaction lands in the same session.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};

use homesim_domain::id::SessionId;

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "homesim_session";

/// The session a request belongs to.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    id: SessionId,
    issued: bool,
}

impl SessionCookie {
    /// Resolve the session from request headers, issuing a new id when the
    /// cookie is absent or unparsable.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let existing = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| value.parse::<SessionId>().ok());

        match existing {
            Some(id) => Self { id, issued: false },
            None => Self {
                id: SessionId::new(),
                issued: true,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Attach the cookie (if newly issued) to `inner`.
    pub fn respond<R>(self, inner: R) -> WithSession<R> {
        WithSession {
            cookie: self,
            inner,
        }
    }

    fn set_cookie_header(&self) -> Option<HeaderValue> {
        if !self.issued {
            return None;
        }
        HeaderValue::from_str(&format!(
            "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
            self.id
        ))
        .ok()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// A response that sets the session cookie when it was just issued.
pub struct WithSession<R> {
    cookie: SessionCookie,
    inner: R,
}

impl<R: IntoResponse> IntoResponse for WithSession<R> {
    fn into_response(self) -> Response {
        let mut response = self.inner.into_response();
        if let Some(value) = self.cookie.set_cookie_header() {
            response.headers_mut().append(SET_COOKIE, value);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn should_issue_new_session_without_cookie() {
        let session = SessionCookie::from_headers(&HeaderMap::new());
        assert!(session.issued);
    }

    #[test]
    fn should_reuse_session_from_cookie() {
        let id = SessionId::new();
        let session =
            SessionCookie::from_headers(&headers(&format!("theme=dark; {COOKIE_NAME}={id}")));
        assert!(!session.issued);
        assert_eq!(session.id(), id);
    }

    #[test]
    fn should_issue_new_session_when_cookie_is_garbage() {
        let session = SessionCookie::from_headers(&headers(&format!("{COOKIE_NAME}=nope")));
        assert!(session.issued);
    }

    #[test]
    fn should_set_cookie_only_for_new_sessions() {
        let fresh = SessionCookie::from_headers(&HeaderMap::new());
        let response = fresh.respond("ok").into_response();
        let value = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(value.starts_with(&format!("{COOKIE_NAME}={}", fresh.id())));
        assert!(value.contains("HttpOnly"));

        let known = SessionCookie::from_headers(&headers(&format!("{COOKIE_NAME}={}", fresh.id())));
        let response = known.respond("ok").into_response();
        assert!(response.headers().get(SET_COOKIE).is_none());
    }
}
