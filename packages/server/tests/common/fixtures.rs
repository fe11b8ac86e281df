//! Test fixtures for creating test data.
//!
//! These fixtures go through the domain actions so rows look exactly like
//! ones created by the app.

use anyhow::Result;
use manager_core::common::UserId;
use manager_core::domains::auth::{self, Credentials};
use manager_core::domains::roster::{self, Player, PlayerForm};
use sqlx::SqlitePool;

/// Register a user with a throwaway password
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> Result<UserId> {
    let user = auth::register(&Credentials::new(username, "password123"), pool).await?;
    Ok(user.id)
}

/// Add-player form with sensible defaults
pub fn player_form(position: &str, name: &str) -> PlayerForm {
    PlayerForm {
        position: position.to_string(),
        name: name.to_string(),
        age: "24".to_string(),
        nationality: "España".to_string(),
        grl: "75".to_string(),
        market_value: "5M".to_string(),
        salary: "20K".to_string(),
    }
}

/// Add a player to a user's roster
pub async fn create_test_player(
    pool: &SqlitePool,
    user_id: UserId,
    position: &str,
    name: &str,
) -> Result<Player> {
    Ok(roster::add_player(user_id, &player_form(position, name), pool).await?)
}
