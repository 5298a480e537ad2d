//! HTTP error payload and the mapping from domain errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use buzzwin_core::errors::error_code::{self, ErrorCode};
use buzzwin_core::BuzzwinError;

/// Error body: `{status, code, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Stable machine-readable code, e.g. `USER_NOT_FOUND`.
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_code::VALIDATION_ERROR, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<BuzzwinError> for ApiError {
    fn from(err: BuzzwinError) -> Self {
        let status = match &err {
            BuzzwinError::UserNotFound { .. }
            | BuzzwinError::RitualNotFound { .. }
            | BuzzwinError::MomentNotFound { .. } => StatusCode::NOT_FOUND,
            BuzzwinError::AlreadyExists { .. } => StatusCode::CONFLICT,
            BuzzwinError::InvalidAction { .. } | BuzzwinError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            BuzzwinError::StorageError(_)
            | BuzzwinError::ConfigError(_)
            | BuzzwinError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %err.coded_string(), "request failed");
            return Self::new(status, err.error_code(), "internal error");
        }
        Self::new(status, err.error_code(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use buzzwin_core::errors::StorageError;

    #[test]
    fn not_found_maps_to_404_with_code() {
        let err: ApiError = BuzzwinError::UserNotFound { id: "u1".into() }.into();
        assert_eq!(err.status, 404);
        assert_eq!(err.code, "USER_NOT_FOUND");
        assert!(err.message.contains("u1"));
    }

    #[test]
    fn invalid_action_maps_to_400() {
        let err: ApiError = BuzzwinError::InvalidAction {
            action: "invalid_action".into(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "INVALID_ACTION");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err: ApiError = BuzzwinError::AlreadyExists {
            entity: "user",
            id: "u1".into(),
        }
        .into();
        assert_eq!(err.status, 409);
    }

    #[test]
    fn storage_errors_hide_details() {
        let err: ApiError = BuzzwinError::from(StorageError::SqliteError {
            message: "disk I/O error at /var/db".into(),
        })
        .into();
        assert_eq!(err.status, 500);
        assert_eq!(err.code, "STORAGE_ERROR");
        assert_eq!(err.message, "internal error");
    }
}
