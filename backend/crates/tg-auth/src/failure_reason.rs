use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    EmptyToken,
    Malformed,
    /// Header declares an algorithm other than the pinned one (including "none")
    AlgorithmMismatch,
    SignatureInvalid,
    Expired,
    /// `sub` absent or not a well-formed user id
    MissingSubject,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyToken => "empty_token",
            Self::Malformed => "malformed",
            Self::AlgorithmMismatch => "algorithm_mismatch",
            Self::SignatureInvalid => "signature_invalid",
            Self::Expired => "expired",
            Self::MissingSubject => "missing_subject",
        }
    }

    /// Human-readable description, safe to return to callers
    pub fn description(&self) -> &'static str {
        match self {
            Self::EmptyToken => "Token is empty",
            Self::Malformed => "Token is malformed",
            Self::AlgorithmMismatch => "Unexpected signing method",
            Self::SignatureInvalid => "Token signature is invalid",
            Self::Expired => "Token is expired",
            Self::MissingSubject => "User ID not found in token",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
