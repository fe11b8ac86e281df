use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::common::UserId;
use crate::server::auth::{session_token_from_headers, SessionStore};

/// Authenticated user for the current request.
///
/// Inserted into request extensions by `session_gate`; handlers behind the
/// gate take it with `Extension<AuthUser>`.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub username: String,
}

/// Middleware that only lets requests with a live session through.
///
/// Anything else is redirected to `/login` before reaching the handler.
pub async fn session_gate(
    State(session_store): State<SessionStore>,
    mut request: Request,
    next: Next,
) -> Response {
    match extract_auth_user(request.headers(), &session_store).await {
        Some(user) => {
            debug!(user_id = %user.user_id, "Session accepted");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            debug!(path = %request.uri().path(), "No session, redirecting to login");
            Redirect::to("/login").into_response()
        }
    }
}

/// Resolve the session cookie to an `AuthUser`
async fn extract_auth_user(headers: &HeaderMap, session_store: &SessionStore) -> Option<AuthUser> {
    let token = session_token_from_headers(headers)?;
    let session = session_store.get_session(&token).await?;

    Some(AuthUser {
        user_id: session.user_id,
        username: session.username,
    })
}
