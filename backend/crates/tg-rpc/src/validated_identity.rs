use crate::{Result as RpcErrorResult, RpcError};

use tg_proto::TokenResponse;

use uuid::Uuid;

/// Identity the validation endpoint vouched for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedIdentity {
    pub subject: Uuid,
    /// Only present for access tokens
    pub email: Option<String>,
}

impl TryFrom<TokenResponse> for ValidatedIdentity {
    type Error = RpcError;

    #[track_caller]
    fn try_from(response: TokenResponse) -> RpcErrorResult<Self> {
        if !response.valid {
            return Err(match response.error {
                Some(error) => RpcError::rejected(error.code, error.message),
                None => RpcError::protocol("invalid response without error detail"),
            });
        }

        let subject = Uuid::parse_str(&response.subject).map_err(|_| {
            RpcError::protocol(format!(
                "valid response with non-UUID subject '{}'",
                response.subject
            ))
        })?;

        Ok(Self {
            subject,
            email: (!response.email.is_empty()).then_some(response.email),
        })
    }
}
