//! Registration, login and refresh on top of a credential store.
//!
//! Holds no mutable state of its own: the hasher, issuer and validator are
//! immutable after construction and the store is responsible for its own
//! consistency. Password hashing runs on the blocking pool so request tasks
//! are not stalled by the Argon2 work factor.

use crate::{AuthError, PasswordHasher, Result as AuthErrorResult, TokenIssuer, TokenValidator};

use tg_core::{
    CredentialStore, Credentials, StoreError, StoreResult, TokenPair, UserIdentity, UserProfile,
    normalize_email, validate_name,
};

use std::future::Future;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use uuid::Uuid;

/// Access/refresh token lifetimes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            access: Duration::from_secs(24 * 60 * 60),
            refresh: Duration::from_secs(7 * 24 * 60 * 60),
        }
    }
}

#[derive(Clone)]
pub struct IdentityService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<PasswordHasher>,
    issuer: Arc<TokenIssuer>,
    validator: Arc<TokenValidator>,
    lifetimes: TokenLifetimes,
    store_timeout: Option<Duration>,
}

impl IdentityService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        issuer: Arc<TokenIssuer>,
        validator: Arc<TokenValidator>,
        lifetimes: TokenLifetimes,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            validator,
            lifetimes,
            store_timeout: None,
        }
    }

    /// Abort any single store call that takes longer than `timeout`
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = Some(timeout);
        self
    }

    pub fn validator(&self) -> &TokenValidator {
        &self.validator
    }

    pub fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }

    /// Register a new user.
    ///
    /// Fails with `EmailExists` if the (normalized) email is taken, including
    /// when a concurrent registration wins the race inside the store.
    pub async fn register(
        &self,
        credentials: Credentials,
        first_name: &str,
        last_name: &str,
    ) -> AuthErrorResult<UserProfile> {
        credentials.validate()?;
        validate_name("first_name", first_name)?;
        validate_name("last_name", last_name)?;

        let email = credentials.normalized_email();

        match self.bounded(self.store.get_by_email(&email)).await {
            Ok(_) => {
                debug!("Registration rejected: email already registered");
                return Err(AuthError::EmailExists {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(StoreError::NotFound { .. }) => {}
            Err(e) => return Err(e.into()),
        }

        let password_hash = self.hash_password(credentials.password).await?;

        let identity = UserIdentity::new(
            email,
            password_hash,
            first_name.trim().to_string(),
            last_name.trim().to_string(),
        );

        self.bounded(self.store.create(&identity)).await?;

        info!("Registered user {}", identity.id);
        Ok(identity.profile())
    }

    /// Authenticate with email and password and issue a token pair.
    ///
    /// Returns `UserNotFound` or `InvalidCredentials`; both render identically
    /// at the HTTP boundary.
    pub async fn login(&self, email: &str, password: &str) -> AuthErrorResult<TokenPair> {
        let email = normalize_email(email);

        let identity = match self.bounded(self.store.get_by_email(&email)).await {
            Ok(identity) => identity,
            Err(StoreError::NotFound { .. }) => {
                // Unknown emails cost the same Argon2 work as a wrong password
                self.verify_placeholder(password.to_string()).await?;
                warn!("Login rejected for unknown email");
                return Err(AuthError::UserNotFound {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let matches = self
            .verify_password(identity.password_hash.clone(), password.to_string())
            .await?;

        if !matches {
            warn!("Login rejected for user {}", identity.id);
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("User {} logged in", identity.id);
        self.issuer
            .issue_pair(&identity, self.lifetimes.access, self.lifetimes.refresh)
    }

    /// Exchange a valid refresh token for a brand-new pair.
    ///
    /// Both tokens are rotated. The presented refresh token stays usable until
    /// it expires; there is no replay detection.
    pub async fn refresh(&self, refresh_token: &str) -> AuthErrorResult<TokenPair> {
        let verified = self.validator.verify(refresh_token)?;

        let identity = self.bounded(self.store.get_by_id(verified.subject)).await?;

        debug!("Refreshed tokens for user {}", identity.id);
        self.issuer
            .issue_pair(&identity, self.lifetimes.access, self.lifetimes.refresh)
    }

    /// Load the public profile of a user
    pub async fn get_user(&self, id: Uuid) -> AuthErrorResult<UserProfile> {
        let identity = self.bounded(self.store.get_by_id(id)).await?;
        Ok(identity.profile())
    }

    /// Remove a user. Tokens already issued stay valid until they expire.
    pub async fn delete_user(&self, id: Uuid) -> AuthErrorResult<()> {
        self.bounded(self.store.delete(id)).await?;
        info!("Deleted user {}", id);
        Ok(())
    }

    async fn bounded<T>(&self, call: impl Future<Output = StoreResult<T>>) -> StoreResult<T> {
        match self.store_timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .map_err(|_| StoreError::internal("credential store timed out"))?,
            None => call.await,
        }
    }

    async fn hash_password(&self, password: String) -> AuthErrorResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_placeholder(&self, password: String) -> AuthErrorResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_placeholder(&password))
            .await
            .map_err(|e| AuthError::internal(format!("Password verification task failed: {}", e)))?
    }

    async fn verify_password(&self, hash: String, password: String) -> AuthErrorResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&hash, &password))
            .await
            .map_err(|e| AuthError::internal(format!("Password verification task failed: {}", e)))?
    }
}
