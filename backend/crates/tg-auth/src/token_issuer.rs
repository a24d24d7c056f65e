use crate::{AuthError, PINNED_ALGORITHM, Result as AuthErrorResult, TokenClaims};

use tg_core::{TokenPair, UserIdentity};

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

/// Signs access/refresh token pairs with the shared HMAC secret
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(PINNED_ALGORITHM),
        }
    }

    /// Build and sign a fresh access/refresh pair for `user`.
    ///
    /// The access token carries the email, the refresh token does not.
    /// `expires_in` comes from `access_ttl`, not from re-reading the token.
    #[track_caller]
    pub fn issue_pair(
        &self,
        user: &UserIdentity,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> AuthErrorResult<TokenPair> {
        let access_token = self.issue_token(user.id, Some(user.email.clone()), access_ttl)?;
        let refresh_token = self.issue_token(user.id, None, refresh_ttl)?;

        Ok(TokenPair::bearer(
            access_token,
            refresh_token,
            ttl_secs(access_ttl),
        ))
    }

    /// Sign a single token for `subject` expiring `ttl` from now
    #[track_caller]
    pub fn issue_token(
        &self,
        subject: Uuid,
        email: Option<String>,
        ttl: Duration,
    ) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();

        let claims = TokenClaims {
            sub: Some(subject.to_string()),
            email,
            exp: now.saturating_add(ttl_secs(ttl)),
            iat: Some(now),
            jti: Some(Uuid::new_v4().to_string()),
        };

        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AuthError::internal(format!("Token signing failed: {}", e)))
    }
}

fn ttl_secs(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}
