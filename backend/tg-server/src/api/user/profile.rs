use crate::{ApiError, ApiResult, AppState, AuthenticatedUser};

use tg_auth::AuthError;
use tg_core::UserProfile;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/v1/user/profile
///
/// Profile of the user the bearer token was issued to
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<UserProfile>> {
    match state.identity.get_user(user.id).await {
        Ok(profile) => Ok(Json(profile)),
        // Token outlived its user
        Err(AuthError::UserNotFound { .. }) => Err(ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(e) => Err(e.into()),
    }
}
