//! Error handling for Buzzwin.
//! One error enum per subsystem, `thiserror` only, aggregated into [`BuzzwinError`].

pub mod buzzwin_error;
pub mod config_error;
pub mod error_code;
pub mod storage_error;

pub use buzzwin_error::{BuzzwinError, BuzzwinResult};
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use storage_error::StorageError;
