//! Configuration errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("invalid TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    /// A resolved setting is outside its accepted range.
    #[error("{field} is out of range: {message}")]
    OutOfRange { field: String, message: String },

    /// A `BUZZWIN_*` environment variable could not be parsed.
    #[error("environment variable {field} is invalid: {message}")]
    BadEnvValue { field: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
