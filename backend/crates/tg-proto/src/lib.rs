//! Wire messages for the token validation RPC.
//!
//! Messages are generated from `proto/validation.proto` by `build.rs`.

include!("generated/tokengate.auth.v1.rs");


/// Fully-qualified RPC path the validation endpoint is served on
pub const VALIDATE_TOKEN_PATH: &str = "/tokengate.auth.v1.AuthService/ValidateToken";

/// Content type for protobuf request and response bodies
pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";

impl TokenResponse {
    /// Response for a token that passed validation
    pub fn valid(subject: String, email: Option<String>) -> Self {
        Self {
            valid: true,
            subject,
            email: email.unwrap_or_default(),
            error: None,
        }
    }

    /// Response for a token that failed validation
    pub fn invalid(error: Error) -> Self {
        Self {
            valid: false,
            subject: String::new(),
            email: String::new(),
            error: Some(error),
        }
    }
}
