use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::domains::auth::{self, Credentials};
use crate::server::app::AppState;
use crate::server::auth::{clear_session_cookie, session_cookie, session_token_from_headers, Session};

/// Describe the registration form
pub async fn register_form_handler() -> Json<Value> {
    Json(json!({
        "form": "register",
        "action": "/register",
        "fields": ["username", "password"],
    }))
}

/// Create a user, then send the browser to the login page
pub async fn register_handler(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> Response {
    match auth::register(&credentials, &state.db_pool).await {
        Ok(_) => Redirect::to("/login").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Describe the login form
pub async fn login_form_handler() -> Json<Value> {
    Json(json!({
        "form": "login",
        "action": "/login",
        "fields": ["username", "password"],
    }))
}

/// Check credentials and open a session, replacing any session the
/// browser already holds
pub async fn login_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(credentials): Form<Credentials>,
) -> Response {
    let user = match auth::login(&credentials, &state.db_pool).await {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    if let Some(previous) = session_token_from_headers(&headers) {
        state.sessions.delete_session(&previous).await;
    }

    let token = state
        .sessions
        .create_session(Session::new(user.id, user.username))
        .await;

    ([(SET_COOKIE, session_cookie(&token))], Redirect::to("/")).into_response()
}

/// Drop the session (if any) and clear the cookie
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token_from_headers(&headers) {
        state.sessions.delete_session(&token).await;
        info!("Session closed");
    }

    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/login")).into_response()
}
