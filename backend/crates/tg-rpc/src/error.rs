use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors returned by [`crate::ValidationClient`]
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Validation endpoint answered HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    /// The endpoint looked at the token and refused it
    #[error("Token rejected: {message} (code: {code}) {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Undecodable response: {source} {location}")]
    Decode {
        location: ErrorLocation,
        #[source]
        source: prost::DecodeError,
    },

    /// Well-formed response that breaks the contract
    #[error("Protocol error: {message} {location}")]
    Protocol {
        message: String,
        location: ErrorLocation,
    },
}

impl RpcError {
    #[track_caller]
    pub fn status(status: u16) -> Self {
        RpcError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        RpcError::Rejected {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn protocol(message: impl Into<String>) -> Self {
        RpcError::Protocol {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wire error code when the token itself was refused
    pub fn rejection_code(&self) -> Option<&str> {
        match self {
            RpcError::Rejected { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RpcError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RpcError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<prost::DecodeError> for RpcError {
    #[track_caller]
    fn from(err: prost::DecodeError) -> Self {
        RpcError::Decode {
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;
