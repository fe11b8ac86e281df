use thiserror::Error;

/// Failures surfaced by the auth and roster services.
///
/// Validation variants carry a message meant for the manager filling the form.
/// `Storage` and `PasswordHash` are logged and shown as a generic failure.
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Username is already taken")]
    DuplicateName,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Field '{field}' must be a whole number")]
    InvalidNumericField { field: &'static str },

    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("Player not found")]
    NotFoundOrNotOwned,

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl ManagerError {
    /// Whether this error came from user input rather than infrastructure.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::PasswordHash(_))
    }

    /// Message safe to show to the end user.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            "Something went wrong, please try again".to_string()
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_hide_internals() {
        let err = ManagerError::Storage(sqlx::Error::RowNotFound);
        assert!(!err.is_validation());
        assert!(!err.user_message().contains("Database"));
    }

    #[test]
    fn test_validation_errors_are_shown_verbatim() {
        let err = ManagerError::InvalidNumericField { field: "age" };
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Field 'age' must be a whole number");
    }
}
