//! Transient login/registration input. Never persisted.

use crate::{
    CoreError, MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
    Result as CoreErrorResult,
};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;

/// Email + plaintext password pair for the duration of a register/login call
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Email in the canonical form used for storage and lookup
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    /// Validate shape of the credentials before any hashing happens.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        let email = self.normalized_email();

        if email.is_empty() {
            return Err(CoreError::Validation {
                field: "email",
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(CoreError::Validation {
                field: "email",
                message: format!("email exceeds {} characters", MAX_EMAIL_LENGTH),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !is_plausible_email(&email) {
            return Err(CoreError::Validation {
                field: "email",
                message: "email is not a valid address".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_len = self.password.chars().count();

        if password_len < MIN_PASSWORD_LENGTH {
            return Err(CoreError::Validation {
                field: "password",
                message: format!(
                    "password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if password_len > MAX_PASSWORD_LENGTH {
            return Err(CoreError::Validation {
                field: "password",
                message: format!("password exceeds {} characters", MAX_PASSWORD_LENGTH),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

// Password must never reach logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Trim and lower-case an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// local@domain.tld with no whitespace and exactly one '@'
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
