use serde::{Deserialize, Serialize};

/// Claims embedded in every token this service signs.
///
/// Unknown claim names are rejected at parse time rather than ignored, so a
/// token minted for some other purpose never half-validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenClaims {
    /// Subject (user id). Optional at the parse layer so its absence is
    /// reported as a missing subject instead of a malformed token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Only carried by access tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// Issued at timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Unique token id, distinguishes tokens minted in the same second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}
