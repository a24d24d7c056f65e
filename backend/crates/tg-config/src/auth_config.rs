use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL, DEFAULT_LEEWAY_SECS,
    DEFAULT_REFRESH_TOKEN_TTL, DEFAULT_STORE_TIMEOUT_SECS, MAX_LEEWAY_SECS, MAX_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH,
};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret shared by issuer and validator
    pub jwt_secret: Option<String>,
    /// humantime duration, e.g. "15m", "24h"
    pub access_token_ttl: String,
    pub refresh_token_ttl: String,
    /// Clock skew tolerated past `exp`
    pub leeway_secs: u64,
    /// Deadline for a single credential store call (0 = none)
    pub store_timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl: String::from(DEFAULT_ACCESS_TOKEN_TTL),
            refresh_token_ttl: String::from(DEFAULT_REFRESH_TOKEN_TTL),
            leeway_secs: DEFAULT_LEEWAY_SECS,
            store_timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

// Hand-written so the secret never ends up in logs
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("leeway_secs", &self.leeway_secs)
            .field("store_timeout_secs", &self.store_timeout_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.jwt_secret()?;

        let access = self.access_ttl()?;
        let refresh = self.refresh_ttl()?;

        if access.is_zero() {
            return Err(ConfigError::auth("auth.access_token_ttl must be positive"));
        }

        for (field, ttl) in [
            ("auth.access_token_ttl", access),
            ("auth.refresh_token_ttl", refresh),
        ] {
            if ttl.as_secs() > MAX_TOKEN_TTL_SECS {
                return Err(ConfigError::auth(format!(
                    "{} must be at most {}",
                    field,
                    humantime::format_duration(Duration::from_secs(MAX_TOKEN_TTL_SECS))
                )));
            }
        }

        if refresh <= access {
            return Err(ConfigError::auth(format!(
                "auth.refresh_token_ttl ({}) must be longer than auth.access_token_ttl ({})",
                self.refresh_token_ttl, self.access_token_ttl
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be 0-{}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        Ok(())
    }

    /// The configured secret, checked for presence and length
    pub fn jwt_secret(&self) -> ConfigErrorResult<&[u8]> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set TG_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(secret.as_bytes())
    }

    pub fn access_ttl(&self) -> ConfigErrorResult<Duration> {
        parse_ttl("auth.access_token_ttl", &self.access_token_ttl)
    }

    pub fn refresh_ttl(&self) -> ConfigErrorResult<Duration> {
        parse_ttl("auth.refresh_token_ttl", &self.refresh_token_ttl)
    }

    pub fn store_timeout(&self) -> Option<Duration> {
        (self.store_timeout_secs > 0).then(|| Duration::from_secs(self.store_timeout_secs))
    }
}

fn parse_ttl(field: &str, value: &str) -> ConfigErrorResult<Duration> {
    humantime::parse_duration(value.trim()).map_err(|e| {
        ConfigError::auth(format!("{} is not a valid duration '{}': {}", field, value, e))
    })
}
