pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, Result};
pub use models::credentials::{Credentials, normalize_email};
pub use models::token_pair::{TOKEN_TYPE_BEARER, TokenPair};
pub use models::user_identity::UserIdentity;
pub use models::user_profile::UserProfile;
pub use models::validation::{
    MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, validate_name,
};
pub use store::credential_store::CredentialStore;
pub use store::store_error::{Result as StoreResult, StoreError};

#[cfg(test)]
mod tests;
