use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::common::{ManagerError, ManagerResult, UserId};

/// User model - SQL persistence layer
///
/// One row per manager. `username` is unique; the store rejects duplicates.
#[derive(sqlx::FromRow, Serialize, Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

impl User {
    /// Find user by ID
    pub async fn find_by_id(id: UserId, pool: &SqlitePool) -> ManagerResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find user by username (exact match)
    pub async fn find_by_username(username: &str, pool: &SqlitePool) -> ManagerResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a new user.
    ///
    /// A unique-constraint violation on `username` maps to `DuplicateName`;
    /// nothing is written in that case.
    pub async fn insert(
        username: &str,
        password_hash: &str,
        pool: &SqlitePool,
    ) -> ManagerResult<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (username, password_hash)
             VALUES (?, ?)
             RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ManagerError::DuplicateName
            }
            other => ManagerError::Storage(other),
        })
    }

    /// Count all users
    pub async fn count(pool: &SqlitePool) -> ManagerResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }
}
