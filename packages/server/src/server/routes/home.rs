use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::common::ManagerResult;
use crate::domains::auth::User;
use crate::domains::roster::roster_size;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// Name shown when the session's user row no longer exists
const FALLBACK_DISPLAY_NAME: &str = "Manager";

#[derive(Serialize)]
pub struct HomeView {
    pub username: String,
    pub roster_size: i64,
}

/// Landing page for a logged-in manager
pub async fn home_handler(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ManagerResult<Json<HomeView>> {
    let user = User::find_by_id(auth_user.user_id, &state.db_pool).await?;
    let roster_size = roster_size(auth_user.user_id, &state.db_pool).await?;

    Ok(Json(HomeView {
        username: user
            .map(|u| u.username)
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string()),
        roster_size,
    }))
}
