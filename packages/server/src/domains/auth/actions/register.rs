//! Register action

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::common::{ManagerError, ManagerResult};
use crate::domains::auth::data::Credentials;
use crate::domains::auth::models::User;
use crate::domains::auth::password::hash_password_async;

/// Create a new user with a hashed password.
///
/// Uniqueness is left to the `users.username` constraint so that two
/// concurrent registrations cannot both succeed.
pub async fn register(credentials: &Credentials, pool: &SqlitePool) -> ManagerResult<User> {
    let (username, password) = credentials.validated()?;
    let password_hash = hash_password_async(password).await?;

    match User::insert(username, &password_hash, pool).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "Registered user");
            Ok(user)
        }
        Err(ManagerError::DuplicateName) => {
            warn!(username = %username, "Registration rejected: name taken");
            Err(ManagerError::DuplicateName)
        }
        Err(e) => Err(e),
    }
}
