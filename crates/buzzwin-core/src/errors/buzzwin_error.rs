//! Top-level error aggregating all subsystem errors.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, StorageError};

/// Errors surfaced by the engagement scoring subsystem.
#[derive(Debug, thiserror::Error)]
pub enum BuzzwinError {
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    #[error("ritual not found: {id}")]
    RitualNotFound { id: String },

    #[error("impact moment not found: {id}")]
    MomentNotFound { id: String },

    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("unrecognized karma action: {action}")]
    InvalidAction { action: String },

    #[error("validation failed: {0}")]
    ValidationError(String),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience result alias used across the workspace.
pub type BuzzwinResult<T> = Result<T, BuzzwinError>;

impl BuzzwinError {
    /// Whether the error was caused by the caller's input rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. }
                | Self::RitualNotFound { .. }
                | Self::MomentNotFound { .. }
                | Self::AlreadyExists { .. }
                | Self::InvalidAction { .. }
                | Self::ValidationError(_)
        )
    }
}

impl ErrorCode for BuzzwinError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => error_code::USER_NOT_FOUND,
            Self::RitualNotFound { .. } => error_code::RITUAL_NOT_FOUND,
            Self::MomentNotFound { .. } => error_code::MOMENT_NOT_FOUND,
            Self::AlreadyExists { .. } => error_code::ALREADY_EXISTS,
            Self::InvalidAction { .. } => error_code::INVALID_ACTION,
            Self::ValidationError(_) => error_code::VALIDATION_ERROR,
            Self::StorageError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
