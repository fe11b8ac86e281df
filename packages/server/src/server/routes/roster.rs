use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension, Form, Json,
};
use serde::Serialize;

use crate::common::{ManagerResult, PlayerId};
use crate::domains::roster::{self, Player, PlayerForm, PlayerUpdateForm};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// Where mutations send the browser afterwards
const ROSTER_PATH: &str = "/modo_carrera";

/// Career-mode page: the sorted roster plus an optional flash message
#[derive(Serialize)]
pub struct RosterView {
    pub username: String,
    pub players: Vec<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Show the roster
pub async fn roster_handler(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ManagerResult<Json<RosterView>> {
    let players = roster::list_players(auth_user.user_id, &state.db_pool).await?;

    Ok(Json(RosterView {
        username: auth_user.username,
        players,
        message: None,
    }))
}

/// Add a player and re-render the roster with the outcome
pub async fn add_player_handler(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Form(form): Form<PlayerForm>,
) -> Response {
    let (status, message) = match roster::add_player(auth_user.user_id, &form, &state.db_pool).await
    {
        Ok(player) => (
            StatusCode::CREATED,
            format!("Player {} added successfully", player.name),
        ),
        Err(e) => {
            e.log();
            (e.status_code(), e.user_message())
        }
    };

    match roster::list_players(auth_user.user_id, &state.db_pool).await {
        Ok(players) => (
            status,
            Json(RosterView {
                username: auth_user.username,
                players,
                message: Some(message),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Remove one of the caller's players
pub async fn delete_player_handler(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(player_id): Path<PlayerId>,
) -> ManagerResult<Redirect> {
    roster::delete_player(auth_user.user_id, player_id, &state.db_pool).await?;
    Ok(Redirect::to(ROSTER_PATH))
}

/// Edit position, rating, age, value and salary of one of the caller's players
pub async fn update_player_handler(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(player_id): Path<PlayerId>,
    Form(form): Form<PlayerUpdateForm>,
) -> ManagerResult<Redirect> {
    roster::update_player(auth_user.user_id, player_id, &form, &state.db_pool).await?;
    Ok(Redirect::to(ROSTER_PATH))
}
