//! Login action

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::common::{ManagerError, ManagerResult};
use crate::domains::auth::data::Credentials;
use crate::domains::auth::models::User;
use crate::domains::auth::password::verify_password_async;

/// Look up a user by name and check the password hash.
///
/// Unknown names and wrong passwords fail the same way so callers cannot
/// probe which usernames exist.
pub async fn login(credentials: &Credentials, pool: &SqlitePool) -> ManagerResult<User> {
    let (username, password) = credentials.validated()?;

    let Some(user) = User::find_by_username(username, pool).await? else {
        debug!(username = %username, "Login failed: unknown user");
        return Err(ManagerError::InvalidCredentials);
    };

    if !verify_password_async(password, &user.password_hash).await? {
        debug!(user_id = %user.id, "Login failed: wrong password");
        return Err(ManagerError::InvalidCredentials);
    }

    info!(user_id = %user.id, "User logged in");
    Ok(user)
}
