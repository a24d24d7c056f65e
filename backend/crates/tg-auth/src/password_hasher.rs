//! Password hashing and verification using Argon2id.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$digest`), so the
//! algorithm, cost parameters and salt travel with the hash. Verification reads
//! the parameters back from the string, which keeps old hashes verifiable
//! after the configured cost changes.

use crate::{AuthError, Result as AuthErrorResult};

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier as _, Version,
};

/// Argon2 work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Plaintext behind the placeholder hash
const PLACEHOLDER_PASSWORD: &str = "tokengate-placeholder-password";

#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    /// Hash with the configured cost, verified against when there is no real one
    placeholder_hash: String,
}

impl PasswordHasher {
    /// Create a hasher with the given work factor
    #[track_caller]
    pub fn new(params: HashingParams) -> AuthErrorResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| AuthError::internal(format!("Invalid Argon2 parameters: {}", e)))?;

        let mut hasher = Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            placeholder_hash: String::new(),
        };
        hasher.placeholder_hash = hasher.hash(PLACEHOLDER_PASSWORD)?;

        Ok(hasher)
    }

    /// Hash a plaintext password with a fresh random salt
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        if plaintext.is_empty() {
            return Err(AuthError::invalid_input("password", "password cannot be empty"));
        }

        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::internal(format!("Password hashing failed: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch. Only a stored hash that cannot be
    /// parsed, or an internal Argon2 failure, is an error.
    #[track_caller]
    pub fn verify(&self, hash: &str, plaintext: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AuthError::internal(format!("Invalid password hash format: {}", e)))?;

        if plaintext.is_empty() {
            return Ok(false);
        }

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::internal(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }

    /// Spend the same Argon2 work as a real verification, for callers that have
    /// no stored hash (unknown user). Always reports a mismatch.
    #[track_caller]
    pub fn verify_placeholder(&self, plaintext: &str) -> AuthErrorResult<bool> {
        self.verify(&self.placeholder_hash, plaintext)?;
        Ok(false)
    }

    pub(crate) fn placeholder_hash(&self) -> &str {
        &self.placeholder_hash
    }
}
