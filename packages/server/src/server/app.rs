//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::domains::fixtures::{FixtureProvider, PlaceholderFixtures};
use crate::server::auth::SessionStore;
use crate::server::middleware::session_gate;
use crate::server::routes::{
    add_player_handler, delete_player_handler, health_handler, home_handler, login_form_handler,
    login_handler, logout_handler, matches_handler, register_form_handler, register_handler,
    roster_handler, update_player_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub sessions: SessionStore,
    pub fixtures: Arc<dyn FixtureProvider>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            sessions: SessionStore::new(),
            fixtures: Arc::new(PlaceholderFixtures),
        }
    }

    /// Swap the fixtures source (tests, future real provider)
    pub fn with_fixtures(mut self, fixtures: Arc<dyn FixtureProvider>) -> Self {
        self.fixtures = fixtures;
        self
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

/// Build the Axum application router
///
/// Public routes: register, login, logout, health.
/// Everything else sits behind `session_gate`.
pub fn build_app(state: AppState) -> Router {
    let gated = Router::new()
        .route("/", get(home_handler))
        .route("/modo_carrera", get(roster_handler).post(add_player_handler))
        .route("/eliminar_jugador/:id", post(delete_player_handler))
        .route("/eliminar/:id", post(delete_player_handler))
        .route("/actualizar_jugador/:id", post(update_player_handler))
        .route("/modificar/:id", post(update_player_handler))
        .route("/partidos", get(matches_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), session_gate));

    Router::new()
        .route("/register", get(register_form_handler).post(register_handler))
        .route("/login", get(login_form_handler).post(login_handler))
        .route("/logout", get(logout_handler))
        .route("/health", get(health_handler))
        .merge(gated)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
