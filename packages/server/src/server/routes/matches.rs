use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use tracing::warn;

use crate::domains::fixtures::Fixture;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Serialize)]
pub struct MatchesView {
    pub fixtures: Vec<Fixture>,
}

/// Matches page backed by the configured fixtures provider
pub async fn matches_handler(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<MatchesView>, (StatusCode, String)> {
    let fixtures = state
        .fixtures
        .upcoming_fixtures(auth_user.user_id)
        .await
        .map_err(|e| {
            warn!(user_id = %auth_user.user_id, error = %e, "Fixture provider failed");
            (
                StatusCode::BAD_GATEWAY,
                "Fixtures are unavailable right now".to_string(),
            )
        })?;

    Ok(Json(MatchesView { fixtures }))
}
