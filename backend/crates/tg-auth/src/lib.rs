pub mod claims;
pub mod error;
pub mod failure_reason;
pub mod identity_service;
pub mod jwt_algorithm;
pub mod password_hasher;
pub mod token_issuer;
pub mod token_validator;
pub mod validation_result;

pub use claims::TokenClaims;
pub use error::{AuthError, Result};
pub use failure_reason::FailureReason;
pub use identity_service::{IdentityService, TokenLifetimes};
pub use jwt_algorithm::{PINNED_ALGORITHM, PINNED_ALGORITHM_NAME};
pub use password_hasher::{HashingParams, PasswordHasher};
pub use token_issuer::TokenIssuer;
pub use token_validator::TokenValidator;
pub use validation_result::{ValidationResult, VerifiedToken};

#[cfg(test)]
mod tests;
