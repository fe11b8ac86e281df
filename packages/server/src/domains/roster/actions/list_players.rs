//! List players action

use sqlx::SqlitePool;

use crate::common::{ManagerResult, UserId};
use crate::domains::roster::models::Player;
use crate::domains::roster::ordering::sort_roster;

/// A user's roster in display order.
pub async fn list_players(user_id: UserId, pool: &SqlitePool) -> ManagerResult<Vec<Player>> {
    let mut players = Player::find_by_owner(user_id, pool).await?;
    sort_roster(&mut players);
    Ok(players)
}

/// Number of players on a user's roster.
pub async fn roster_size(user_id: UserId, pool: &SqlitePool) -> ManagerResult<i64> {
    Player::count_by_owner(user_id, pool).await
}
