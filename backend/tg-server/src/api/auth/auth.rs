//! Registration, login and token refresh handlers

use crate::{ApiResult, AppState, LoginRequest, RefreshRequest, RegisterRequest};

use tg_core::{Credentials, TokenPair, UserProfile};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserProfile>)> {
    let Json(request) = payload?;

    let profile = state
        .identity
        .register(
            Credentials::new(request.email, request.password),
            &request.first_name,
            &request.last_name,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPair>> {
    let Json(request) = payload?;

    let pair = state
        .identity
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(pair))
}

/// POST /api/v1/auth/refresh
///
/// Both tokens are rotated on every call.
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPair>> {
    let Json(request) = payload?;

    let pair = state.identity.refresh(&request.refresh_token).await?;

    Ok(Json(pair))
}
