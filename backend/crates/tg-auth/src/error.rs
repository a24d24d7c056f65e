use crate::FailureReason;

use tg_core::{CoreError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already registered {location}")]
    EmailExists { location: ErrorLocation },

    #[error("User not found {location}")]
    UserNotFound { location: ErrorLocation },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Invalid token ({reason}): {message} {location}")]
    Token {
        reason: FailureReason,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid input '{field}': {message} {location}")]
    InvalidInput {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Token rejection carrying the reason's standard description
    #[track_caller]
    pub fn token(reason: FailureReason) -> Self {
        Self::token_with_message(reason, reason.description())
    }

    #[track_caller]
    pub fn token_with_message(reason: FailureReason, message: impl Into<String>) -> Self {
        Self::Token {
            reason,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Token failure kind, if this is a token rejection
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::Token { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Convert to protobuf Error message for RPC responses
    pub fn to_proto_error(&self) -> tg_proto::Error {
        tg_proto::Error {
            code: self.rpc_code().to_string(),
            message: self.client_message(),
        }
    }

    /// Error code on the validation RPC wire
    pub fn rpc_code(&self) -> &'static str {
        match self {
            Self::Token { reason, .. } => match reason {
                FailureReason::EmptyToken => "invalid_token",
                FailureReason::MissingSubject => "missing_user_id",
                FailureReason::Malformed
                | FailureReason::AlgorithmMismatch
                | FailureReason::SignatureInvalid
                | FailureReason::Expired => "token_parsing_failed",
            },
            Self::EmailExists { .. } => "email_exists",
            Self::UserNotFound { .. } => "user_not_found",
            Self::InvalidCredentials { .. } => "invalid_credentials",
            Self::InvalidInput { .. } => "invalid_input",
            Self::Internal { .. } => "internal",
        }
    }

    /// Machine-readable code for HTTP error bodies.
    /// Unknown user and wrong password share a code so responses don't
    /// reveal which half of the credentials was wrong.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmailExists { .. } => "EMAIL_EXISTS",
            Self::UserNotFound { .. } | Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Token { reason, .. } => match reason {
                FailureReason::Expired => "TOKEN_EXPIRED",
                _ => "INVALID_TOKEN",
            },
            Self::InvalidInput { .. } => "VALIDATION_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Message without location or decoder details, safe to send to a client
    pub fn client_message(&self) -> String {
        match self {
            Self::EmailExists { .. } => "Email already registered".to_string(),
            Self::UserNotFound { .. } | Self::InvalidCredentials { .. } => {
                "Invalid email or password".to_string()
            }
            Self::Token { reason, .. } => reason.description().to_string(),
            Self::InvalidInput { message, .. } => message.clone(),
            Self::Internal { .. } => "Internal server error".to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidInput { field, .. } => Some(field.clone()),
            _ => None,
        }
    }
}

/// Store errors map 1:1 onto the auth taxonomy; store details stay in logs.
impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            StoreError::DuplicateEmail { .. } => Self::EmailExists { location },
            StoreError::NotFound { .. } => Self::UserNotFound { location },
            StoreError::Internal { message, .. } => {
                log::error!("Credential store failure: {}", message);
                Self::Internal { message, location }
            }
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        Self::InvalidInput {
            field: e.field().to_string(),
            message: e.message().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
