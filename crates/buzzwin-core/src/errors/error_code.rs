//! ErrorCode trait for the HTTP boundary.

/// Every error enum implements this to provide a stable, machine-readable
/// code string for API consumers.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "USER_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const RITUAL_NOT_FOUND: &str = "RITUAL_NOT_FOUND";
pub const MOMENT_NOT_FOUND: &str = "MOMENT_NOT_FOUND";
pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
pub const INVALID_ACTION: &str = "INVALID_ACTION";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
