use axum::http::{header::COOKIE, HeaderMap};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::UserId;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session_token";

/// Session token (random UUID)
pub type SessionToken = String;

/// Session data stored after a successful login
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// In-memory session store
///
/// Sessions live until logout or process restart; there is no expiry.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session and return the token
    pub async fn create_session(&self, session: Session) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Get session by token
    pub async fn get_session(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).cloned()
    }

    /// Delete session (logout). Unknown tokens are ignored.
    pub async fn delete_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the session token out of the request's `Cookie` headers
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.to_string())
        .filter(|token| !token.is_empty())
}

/// `Set-Cookie` value that hands the token to the browser
pub fn session_cookie(token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token)
}

/// `Set-Cookie` value that removes the token from the browser
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_session_creation() {
        let store = SessionStore::new();
        let token = store.create_session(Session::new(UserId::from(7), "alice")).await;
        assert!(!token.is_empty());

        let retrieved = store.get_session(&token).await;
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().user_id, UserId::from(7));
    }

    #[tokio::test]
    async fn test_delete_session_is_idempotent() {
        let store = SessionStore::new();
        let token = store.create_session(Session::new(UserId::from(1), "bob")).await;

        store.delete_session(&token).await;
        store.delete_session(&token).await;

        assert!(store.get_session(&token).await.is_none());
        assert!(store.is_empty().await);
    }

    #[test]
    fn test_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; session_token=abc-123; other=1"),
        );
        assert_eq!(session_token_from_headers(&headers).as_deref(), Some("abc-123"));
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        let mut headers = HeaderMap::new();
        assert!(session_token_from_headers(&headers).is_none());

        headers.insert(COOKIE, HeaderValue::from_static("session_token="));
        assert!(session_token_from_headers(&headers).is_none());
    }
}
