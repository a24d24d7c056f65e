use crate::{
    AuthError, FailureReason, PINNED_ALGORITHM, PINNED_ALGORITHM_NAME, Result as AuthErrorResult,
    TokenClaims, ValidationResult, VerifiedToken,
};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation, decode};
use log::debug;
use serde::Deserialize;
use uuid::Uuid;

/// Only the header field the validator cross-checks; everything else is ignored
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Verifies tokens signed by [`crate::TokenIssuer`] with the same secret
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    leeway_secs: i64,
}

impl TokenValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(PINNED_ALGORITHM);
        // Expiry is checked here after the signature, with exact `now >= exp` semantics
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            leeway_secs: 0,
        }
    }

    /// Allow `secs` of clock skew past `exp`
    pub fn with_leeway(mut self, secs: u64) -> Self {
        self.leeway_secs = i64::try_from(secs).unwrap_or(i64::MAX);
        self
    }

    /// Validate a token, reporting the outcome as a value.
    pub fn validate(&self, token: &str) -> ValidationResult {
        match self.verify(token) {
            Ok(verified) => verified.into(),
            Err(e) => {
                debug!("Token rejected: {}", e);
                ValidationResult::Invalid(e.failure_reason().unwrap_or(FailureReason::Malformed))
            }
        }
    }

    /// Validate a token, returning the verified identity or a typed failure.
    ///
    /// Checks run in a fixed order: emptiness, structure, pinned algorithm,
    /// signature, claim shape, expiry, subject.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<VerifiedToken> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::token(FailureReason::EmptyToken));
        }

        let algorithm = header_algorithm(token)?;
        if algorithm != PINNED_ALGORITHM_NAME {
            return Err(AuthError::token_with_message(
                FailureReason::AlgorithmMismatch,
                format!("Unexpected signing method: {}", algorithm),
            ));
        }

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match classify(e.kind()) {
                    Some(reason) => AuthError::token_with_message(reason, e.to_string()),
                    None => AuthError::internal(format!("Token verification failed: {}", e)),
                }
            })?;
        let claims = token_data.claims;

        let now = Utc::now().timestamp();
        if now >= claims.exp.saturating_add(self.leeway_secs) {
            return Err(AuthError::token(FailureReason::Expired));
        }

        let subject = claims
            .sub
            .as_deref()
            .filter(|sub| !sub.is_empty())
            .and_then(|sub| Uuid::parse_str(sub).ok())
            .ok_or_else(|| AuthError::token(FailureReason::MissingSubject))?;

        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or_else(|| {
            AuthError::token_with_message(FailureReason::Malformed, "exp out of range")
        })?;

        Ok(VerifiedToken {
            subject,
            email: claims.email,
            expires_at,
        })
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        PINNED_ALGORITHM_NAME
    }
}

/// Split the compact form and read the header's declared algorithm.
///
/// Header and payload must be non-empty base64url and the header must be JSON
/// with a string `alg`. An empty signature segment is allowed through here so
/// unsigned (`alg: none`) tokens are reported as an algorithm mismatch.
#[track_caller]
fn header_algorithm(token: &str) -> AuthErrorResult<String> {
    let segments: Vec<&str> = token.split('.').collect();
    let [header, payload, signature] = segments.as_slice() else {
        return Err(malformed("expected three dot-separated segments"));
    };

    if header.is_empty() || payload.is_empty() {
        return Err(malformed("empty header or claims segment"));
    }

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|_| malformed("header is not base64url"))?;

    URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| malformed("claims are not base64url"))?;

    let raw: RawHeader =
        serde_json::from_slice(&header_bytes).map_err(|_| malformed("header is not valid JSON"))?;

    if raw.alg == PINNED_ALGORITHM_NAME && URL_SAFE_NO_PAD.decode(signature).is_err() {
        return Err(AuthError::token_with_message(
            FailureReason::SignatureInvalid,
            "signature is not base64url",
        ));
    }

    Ok(raw.alg)
}

#[track_caller]
fn malformed(message: &str) -> AuthError {
    AuthError::token_with_message(
        FailureReason::Malformed,
        format!("Token is malformed: {}", message),
    )
}

/// Map a decode failure to a token rejection reason.
/// `None` means the failure is ours (key or crypto backend), not the token's.
fn classify(kind: &ErrorKind) -> Option<FailureReason> {
    match kind {
        // Structure was already checked, so remaining base64 failures are the signature's
        ErrorKind::InvalidSignature | ErrorKind::Base64(_) => {
            Some(FailureReason::SignatureInvalid)
        }
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            Some(FailureReason::AlgorithmMismatch)
        }
        ErrorKind::ExpiredSignature => Some(FailureReason::Expired),
        ErrorKind::InvalidToken
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::ImmatureSignature
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject => Some(FailureReason::Malformed),
        _ => None,
    }
}
