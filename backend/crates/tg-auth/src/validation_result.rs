use crate::FailureReason;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity extracted from a token that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub subject: Uuid,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// Outcome of validating a token. A subject exists only for valid tokens and
/// a failure reason only for invalid ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid {
        subject: Uuid,
        email: Option<String>,
    },
    Invalid(FailureReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn subject(&self) -> Option<Uuid> {
        match self {
            Self::Valid { subject, .. } => Some(*subject),
            Self::Invalid(_) => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Valid { email, .. } => email.as_deref(),
            Self::Invalid(_) => None,
        }
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }
}

impl From<VerifiedToken> for ValidationResult {
    fn from(token: VerifiedToken) -> Self {
        Self::Valid {
            subject: token.subject,
            email: token.email,
        }
    }
}
