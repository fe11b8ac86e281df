use serde::Serialize;
use sqlx::SqlitePool;

use crate::common::{ManagerResult, PlayerId, UserId};
use crate::domains::roster::data::{NewPlayer, PlayerUpdate};

/// Player model - SQL persistence layer
///
/// Every query that touches an existing row filters on `user_id` as well as
/// `id`, so a player is never reachable through another user's session.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub user_id: UserId,
    pub position: String,
    pub name: String,
    pub age: i64,
    pub nationality: String,
    pub grl: i64,

    // Season stats, not editable from the roster forms
    pub matches: i64,
    pub goals: i64,
    pub assists: i64,

    pub market_value: String,
    pub salary: String,
}

impl Player {
    /// Find a player by ID, only if owned by `user_id`
    pub async fn find_owned(
        id: PlayerId,
        user_id: UserId,
        pool: &SqlitePool,
    ) -> ManagerResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM players WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All players owned by a user, in insertion order
    pub async fn find_by_owner(user_id: UserId, pool: &SqlitePool) -> ManagerResult<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM players WHERE user_id = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Number of players owned by a user
    pub async fn count_by_owner(user_id: UserId, pool: &SqlitePool) -> ManagerResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a new player for `user_id`
    pub async fn insert(
        user_id: UserId,
        player: &NewPlayer,
        pool: &SqlitePool,
    ) -> ManagerResult<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO players (
                user_id,
                position,
                name,
                age,
                nationality,
                grl,
                market_value,
                salary
             )
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(user_id)
        .bind(&player.position)
        .bind(&player.name)
        .bind(player.age)
        .bind(&player.nationality)
        .bind(player.grl)
        .bind(&player.market_value)
        .bind(&player.salary)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Overwrite the editable fields of an owned player.
    ///
    /// Returns None when no row matches both `id` and `user_id`.
    pub async fn update_owned(
        id: PlayerId,
        user_id: UserId,
        update: &PlayerUpdate,
        pool: &SqlitePool,
    ) -> ManagerResult<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE players
             SET position = ?, grl = ?, age = ?, market_value = ?, salary = ?
             WHERE id = ? AND user_id = ?
             RETURNING *",
        )
        .bind(&update.position)
        .bind(update.grl)
        .bind(update.age)
        .bind(&update.market_value)
        .bind(&update.salary)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete an owned player. Returns the number of rows removed (0 or 1).
    pub async fn delete_owned(id: PlayerId, user_id: UserId, pool: &SqlitePool) -> ManagerResult<u64> {
        let result = sqlx::query("DELETE FROM players WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
