//! Input limits shared by registration and the HTTP layer.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// RFC 5321 upper bound for a forward path
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Bounds the work a single hash call can be asked to do
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_NAME_LENGTH: usize = 100;

/// Validate a first/last name: non-empty after trimming and bounded in length.
#[track_caller]
pub fn validate_name(field: &'static str, value: &str) -> CoreErrorResult<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(CoreError::Validation {
            field,
            message: format!("{} cannot be empty", field),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation {
            field,
            message: format!("{} exceeds {} characters", field, MAX_NAME_LENGTH),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
