//! Add player action

use sqlx::SqlitePool;
use tracing::info;

use crate::common::{ManagerResult, UserId};
use crate::domains::roster::data::{NewPlayer, PlayerForm};
use crate::domains::roster::models::Player;

/// Validate the form and insert a player owned by `user_id`.
///
/// Nothing is written when validation fails.
pub async fn add_player(
    user_id: UserId,
    form: &PlayerForm,
    pool: &SqlitePool,
) -> ManagerResult<Player> {
    let new_player = NewPlayer::try_from(form)?;
    let player = Player::insert(user_id, &new_player, pool).await?;

    info!(
        user_id = %user_id,
        player_id = %player.id,
        position = %player.position,
        "Added player to roster"
    );
    Ok(player)
}
