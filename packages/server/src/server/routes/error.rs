use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::common::ManagerError;

impl ManagerError {
    /// HTTP status for this failure
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateName => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidNumericField { .. } | Self::MissingField { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFoundOrNotOwned => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log infrastructure failures; validation failures are expected traffic.
    pub(crate) fn log(&self) {
        if !self.is_validation() {
            error!(error = %self, "Request failed");
        }
    }
}

impl IntoResponse for ManagerError {
    fn into_response(self) -> Response {
        self.log();
        (
            self.status_code(),
            Json(json!({
                "ok": false,
                "error": self.user_message(),
            })),
        )
            .into_response()
    }
}
