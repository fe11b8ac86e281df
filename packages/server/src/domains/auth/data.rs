use serde::Deserialize;

use crate::common::{ManagerError, ManagerResult};

/// Username/password pair as posted by the register and login forms
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Trimmed username, rejecting blank names and empty passwords.
    ///
    /// The password is used as typed; whitespace is significant there.
    pub fn validated(&self) -> ManagerResult<(&str, &str)> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ManagerError::MissingField { field: "username" });
        }
        if self.password.is_empty() {
            return Err(ManagerError::MissingField { field: "password" });
        }
        Ok((username, self.password.as_str()))
    }
}
