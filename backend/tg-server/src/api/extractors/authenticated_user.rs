//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

/// User identified by a valid access token in the `Authorization` header
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Option<String>,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| unauthorized("Missing Authorization header"))?
                .to_str()
                .map_err(|_| unauthorized("Authorization header is not valid ASCII"))?;

            let token = header
                .get(..BEARER_PREFIX.len())
                .filter(|scheme| scheme.eq_ignore_ascii_case(BEARER_PREFIX))
                .map(|_| &header[BEARER_PREFIX.len()..])
                .ok_or_else(|| unauthorized("Authorization scheme must be Bearer"))?;

            let verified = state.identity.validator().verify(token)?;

            Ok(AuthenticatedUser {
                id: verified.subject,
                email: verified.email,
            })
        }
    }
}

#[track_caller]
fn unauthorized(message: &str) -> ApiError {
    ApiError::Unauthorized {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
