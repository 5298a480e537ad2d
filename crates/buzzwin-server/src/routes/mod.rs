//! Route handlers, one module per resource.

pub mod completions;
pub mod health;
pub mod karma;
pub mod level;
pub mod moments;
pub mod rituals;
pub mod stats;
pub mod users;

use buzzwin_core::constants::MAX_TEXT_LENGTH;

use crate::error::ApiError;

/// Trimmed value of a required text field.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(ApiError::bad_request(format!(
            "{field} exceeds {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Like `required_text` but an empty value is allowed.
pub(crate) fn optional_text(field: &str, value: &str) -> Result<String, ApiError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ApiError::bad_request(format!(
            "{field} exceeds {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(value.trim().to_string())
}
