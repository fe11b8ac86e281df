use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::common::{ManagerError, ManagerResult};

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// Returns the PHC string (algorithm, params, salt and digest in one value).
pub fn hash_password(password: &str) -> ManagerResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ManagerError::PasswordHash(e.to_string()))
}

/// Check a plaintext password against a stored PHC string.
///
/// A malformed stored hash is an infrastructure failure, not a bad password.
pub fn verify_password(password: &str, stored_hash: &str) -> ManagerResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| ManagerError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// `hash_password` on the blocking pool so Argon2 does not stall the runtime
pub async fn hash_password_async(password: &str) -> ManagerResult<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ManagerError::PasswordHash(e.to_string()))?
}

/// `verify_password` on the blocking pool
pub async fn verify_password_async(password: &str, stored_hash: &str) -> ManagerResult<bool> {
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();
    tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| ManagerError::PasswordHash(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_contains_plaintext() {
        let hash = hash_password("correct horse").unwrap();
        assert_ne!(hash, "correct horse");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();
        assert_ne!(first, second, "Each hash should use a fresh salt");
    }

    #[test]
    fn test_verify_round_trip() {
        let hash = hash_password("secret").unwrap();
        assert!(verify_password("secret", &hash).unwrap());
        assert!(!verify_password("Secret", &hash).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let result = verify_password("secret", "not-a-phc-string");
        assert!(matches!(result, Err(ManagerError::PasswordHash(_))));
    }

    #[tokio::test]
    async fn test_async_helpers_match_sync_versions() {
        let hash = hash_password_async("secret").await.unwrap();
        assert!(verify_password("secret", &hash).unwrap());
        assert!(verify_password_async("secret", &hash).await.unwrap());
        assert!(!verify_password_async("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_async_verify_keeps_malformed_hash_error() {
        let result = verify_password_async("secret", "not-a-phc-string").await;
        assert!(matches!(result, Err(ManagerError::PasswordHash(_))));
    }
}
