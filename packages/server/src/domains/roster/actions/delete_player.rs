//! Delete player action

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::common::{ManagerError, ManagerResult, PlayerId, UserId};
use crate::domains::roster::models::Player;

/// Permanently remove an owned player.
pub async fn delete_player(
    user_id: UserId,
    player_id: PlayerId,
    pool: &SqlitePool,
) -> ManagerResult<()> {
    if Player::delete_owned(player_id, user_id, pool).await? == 0 {
        warn!(user_id = %user_id, player_id = %player_id, "Delete rejected: not found or not owned");
        return Err(ManagerError::NotFoundOrNotOwned);
    }

    info!(user_id = %user_id, player_id = %player_id, "Deleted player");
    Ok(())
}
