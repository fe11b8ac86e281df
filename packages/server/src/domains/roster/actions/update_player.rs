//! Update player action

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::common::{ManagerError, ManagerResult, PlayerId, UserId};
use crate::domains::roster::data::{PlayerUpdate, PlayerUpdateForm};
use crate::domains::roster::models::Player;

/// Overwrite position, rating, age, market value and salary of an owned player.
///
/// The form is validated before the store is touched. The update itself is a
/// single statement filtered on owner, so a player belonging to someone else
/// is reported as missing.
pub async fn update_player(
    user_id: UserId,
    player_id: PlayerId,
    form: &PlayerUpdateForm,
    pool: &SqlitePool,
) -> ManagerResult<Player> {
    let update = PlayerUpdate::try_from(form)?;

    match Player::update_owned(player_id, user_id, &update, pool).await? {
        Some(player) => {
            info!(user_id = %user_id, player_id = %player_id, "Updated player");
            Ok(player)
        }
        None => {
            warn!(user_id = %user_id, player_id = %player_id, "Update rejected: not found or not owned");
            Err(ManagerError::NotFoundOrNotOwned)
        }
    }
}
